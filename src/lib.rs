//! # Defancy - Unicode-to-ASCII glyph normalizer
//!
//! Defancy folds decorative Unicode letter variants back to plain ASCII:
//! mathematical bold, italic, script, fraktur, double-struck, sans-serif,
//! monospace, fullwidth forms, small capitals, and circled Latin letters.
//! Everything outside those blocks passes through untouched, so the fold
//! is total, pure, and idempotent.
//!
//! ## Quick Start
//!
//! ```
//! use defancy::normalize;
//!
//! assert_eq!(normalize("𝔑𝔬 𝔉𝔞𝔫𝔠𝔶!"), "No Fancy!");
//! assert_eq!(normalize("Ｈｅｌｌｏ ʜᴇʟʟᴏ"), "Hello hello");
//! ```
//!
//! A [`Normalizer`] restricted to a subset of blocks can be built from a
//! [`NormalizerConfig`]:
//!
//! ```
//! use defancy::{Block, Normalizer, NormalizerConfig};
//!
//! let fullwidth_only = Normalizer::new(NormalizerConfig {
//!     blocks: vec![Block::Fullwidth],
//! });
//! assert_eq!(fullwidth_only.normalize("Ｈｉ 𝐇𝐢"), "Hi 𝐇𝐢");
//! ```
//!
//! ## Architecture
//!
//! - [`glyph`] - block data, the lookup table, and the fold itself
//! - [`record`] - in-place defancification of name-carrying records
//! - [`config`] - normalizer configuration
//! - [`error`] - error types for the crate's edges

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod glyph;
pub mod record;

// Re-export commonly used types
pub use config::NormalizerConfig;
pub use error::{DefancyError, Result};
pub use glyph::{normalize, Block, GlyphMap, GlyphRange, Normalizer};
pub use record::{defancify_entity, defancify_row, defancify_rows, NamedEntity, Row, RowSet};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
