//! Glyph table construction and defancification.

mod data;
mod map;
mod normalizer;

pub use data::{Block, GlyphRange};
pub use map::GlyphMap;
pub use normalizer::{normalize, Normalizer};
