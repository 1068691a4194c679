//! Folding styled Unicode text back to plain ASCII.

use crate::config::NormalizerConfig;
use crate::glyph::map::{GlyphMap, FULL_MAP};
use std::borrow::Cow;

/// Folds every styled letter in `input` to its ASCII equivalent, leaving
/// all other characters untouched.
///
/// Uses the shared map covering every supported block. Total and pure:
/// unmapped code points simply pass through, and the input is returned
/// borrowed when it contains no styled letter at all.
///
/// ```
/// use defancy::normalize;
///
/// assert_eq!(normalize("𝐇𝐞𝐥𝐥𝐨"), "Hello");
/// assert_eq!(normalize("nothing fancy"), "nothing fancy");
/// ```
pub fn normalize(input: &str) -> Cow<'_, str> {
    fold(&FULL_MAP, input)
}

/// Glyph normalizer restricted to a configured set of styled blocks.
#[derive(Debug, Clone)]
pub struct Normalizer {
    map: GlyphMap,
}

impl Normalizer {
    /// Creates a normalizer folding the blocks named in `config`.
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            map: GlyphMap::with_blocks(&config.blocks),
        }
    }

    /// Creates a normalizer with default configuration (every block).
    pub fn default_config() -> Self {
        Self::new(NormalizerConfig::default())
    }

    /// Folds styled letters from the configured blocks; same contract as
    /// the module-level [`normalize`].
    pub fn normalize<'a>(&self, input: &'a str) -> Cow<'a, str> {
        fold(&self.map, input)
    }

    /// The lookup table backing this normalizer.
    pub fn map(&self) -> &GlyphMap {
        &self.map
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::default_config()
    }
}

/// Walks `input` by code point and substitutes every mapped one. Scans for
/// the first code point that actually changes before allocating, so text
/// with nothing to fold is returned borrowed. The self-mapping table
/// entries (plain `s` and `x` from the small-caps block) never count as a
/// change.
fn fold<'a>(map: &GlyphMap, input: &'a str) -> Cow<'a, str> {
    let first_change = input
        .char_indices()
        .find(|&(_, c)| map.lookup(c).is_some_and(|to| to != c));
    match first_change {
        None => Cow::Borrowed(input),
        Some((start, _)) => {
            let mut out = String::with_capacity(input.len());
            out.push_str(&input[..start]);
            for c in input[start..].chars() {
                out.push(map.lookup(c).unwrap_or(c));
            }
            Cow::Owned(out)
        }
    }
}
