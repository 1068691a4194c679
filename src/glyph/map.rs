//! The glyph lookup table.

use crate::glyph::data::{Block, GlyphRange};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Shared map covering every supported block, built on first use and never
/// mutated afterward, so it is safe to read from any number of threads.
pub(crate) static FULL_MAP: Lazy<GlyphMap> = Lazy::new(GlyphMap::full);

/// Immutable mapping from a styled code point to its ASCII equivalent.
///
/// Built once from the declarative block data in [`crate::glyph::data`].
/// When two blocks register the same key, the block registered later wins;
/// with the fixed block order this makes the table fully deterministic.
#[derive(Debug, Clone, Default)]
pub struct GlyphMap {
    entries: HashMap<char, char>,
}

impl GlyphMap {
    /// Builds a map covering every supported block.
    pub fn full() -> Self {
        Self::with_blocks(&Block::ALL)
    }

    /// Builds a map covering only the given blocks, registered in the
    /// order given.
    pub fn with_blocks(blocks: &[Block]) -> Self {
        let mut map = Self::default();
        for &block in blocks {
            for range in block.ranges() {
                map.register_range(range);
            }
            map.register_pairs(block.pairs());
        }
        map
    }

    fn register_range(&mut self, range: &GlyphRange) {
        for i in 0..=(range.end - range.start) {
            let from = char::from_u32(range.start + i);
            let to = char::from_u32(range.ascii_start + i);
            if let (Some(from), Some(to)) = (from, to) {
                self.entries.insert(from, to);
            }
        }
    }

    fn register_pairs(&mut self, pairs: &[(char, char)]) {
        for &(from, to) in pairs {
            self.entries.insert(from, to);
        }
    }

    /// Looks up the ASCII replacement for a code point.
    #[inline]
    pub fn lookup(&self, c: char) -> Option<char> {
        self.entries.get(&c).copied()
    }

    /// Returns `true` if the map has a replacement for `c`.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.entries.contains_key(&c)
    }

    /// Number of mapped code points.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no blocks were registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_map_size() {
        // 12 plain range alphabets, double-struck and circled at 52 entries
        // each, plus the 40-entry script and 24-entry small-caps tables.
        assert_eq!(GlyphMap::full().len(), 14 * 52 + 40 + 24);
    }

    #[test]
    fn test_lookup_range_entry() {
        let map = GlyphMap::full();
        assert_eq!(map.lookup('\u{1D400}'), Some('A')); // 𝐀
        assert_eq!(map.lookup('\u{1D433}'), Some('z')); // 𝐳
        assert_eq!(map.lookup('\u{FF28}'), Some('H')); // Ｈ
    }

    #[test]
    fn test_lookup_sparse_entry() {
        let map = GlyphMap::full();
        assert_eq!(map.lookup('\u{1D49C}'), Some('A')); // 𝒜
        assert_eq!(map.lookup('\u{24D0}'), Some('a')); // ⓐ
        assert_eq!(map.lookup('\u{029C}'), Some('h')); // ʜ
    }

    #[test]
    fn test_unassigned_script_letters_absent() {
        let map = GlyphMap::full();
        // Script capital B lives at ℬ (U+212C) outside the block and is
        // deliberately not mapped.
        assert_eq!(map.lookup('\u{212C}'), None);
        assert_eq!(map.lookup('\u{2130}'), None); // ℰ
        assert_eq!(map.lookup('\u{2134}'), None); // ℴ
    }

    #[test]
    fn test_ascii_values_never_fancy() {
        let map = GlyphMap::full();
        for c in ('A'..='Z').chain('a'..='z') {
            // 's' and 'x' map to themselves via the small-caps table;
            // every other mapped value must not be a key.
            if let Some(to) = map.lookup(c) {
                assert_eq!(to, c);
            }
        }
    }

    #[test]
    fn test_subset_map() {
        let map = GlyphMap::with_blocks(&[Block::Fullwidth]);
        assert_eq!(map.len(), 52);
        assert_eq!(map.lookup('\u{FF21}'), Some('A')); // Ａ
        assert_eq!(map.lookup('\u{1D400}'), None); // 𝐀 not registered
    }

    #[test]
    fn test_empty_map() {
        let map = GlyphMap::with_blocks(&[]);
        assert!(map.is_empty());
        assert!(!map.contains('\u{1D400}'));
    }
}
