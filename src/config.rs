//! Configuration for the defancy normalizer.

use crate::glyph::Block;
use serde::{Deserialize, Serialize};

/// Normalizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Styled blocks to fold, registered in list order.
    /// Default: every supported block.
    pub blocks: Vec<Block>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            blocks: Block::ALL.to_vec(),
        }
    }
}
