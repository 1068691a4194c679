//! Error types for defancy.
//!
//! The normalizer itself is total and never fails; errors only arise at
//! the edges, when parsing block names or doing I/O in the CLI.

use thiserror::Error;

/// The main error type for defancy operations.
#[derive(Error, Debug)]
pub enum DefancyError {
    /// A block name that does not match any supported styled-letter block.
    #[error("unknown glyph block: {0}")]
    UnknownBlock(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for defancy operations.
pub type Result<T> = std::result::Result<T, DefancyError>;
