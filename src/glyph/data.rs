//! Static code point data for the styled-letter blocks.
//!
//! Every supported block is described declaratively, either as one or more
//! [`GlyphRange`]s (for alphabets laid out in consecutive code point order)
//! or as a literal sparse table (for alphabets with holes or irregular
//! placement). The tables are `const`; the lookup map is built from them
//! exactly once.

use crate::error::DefancyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A contiguous run of styled code points mapped linearly onto ASCII.
///
/// Source code point `start + i` maps to `ascii_start + i` for
/// `0 <= i <= end - start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRange {
    /// First styled code point in the run.
    pub start: u32,
    /// Last styled code point in the run, inclusive.
    pub end: u32,
    /// ASCII code point that `start` maps to.
    pub ascii_start: u32,
}

const fn run(start: u32, end: u32, ascii_start: u32) -> GlyphRange {
    GlyphRange {
        start,
        end,
        ascii_start,
    }
}

const UPPER_A: u32 = 'A' as u32;
const LOWER_A: u32 = 'a' as u32;

/// Mathematical bold (𝐀–𝐙, 𝐚–𝐳).
const MATH_BOLD: &[GlyphRange] = &[
    run(0x1D400, 0x1D419, UPPER_A),
    run(0x1D41A, 0x1D433, LOWER_A),
];

/// Mathematical italic (𝐴–𝑍, 𝑎–𝑧).
const MATH_ITALIC: &[GlyphRange] = &[
    run(0x1D434, 0x1D44D, UPPER_A),
    run(0x1D44E, 0x1D467, LOWER_A),
];

/// Mathematical bold italic.
const MATH_BOLD_ITALIC: &[GlyphRange] = &[
    run(0x1D468, 0x1D481, UPPER_A),
    run(0x1D482, 0x1D49B, LOWER_A),
];

/// Mathematical script.
///
/// Unicode never assigned the letters that already existed as standalone
/// symbols before the mathematical alphanumeric block was added (uppercase
/// B, E, F, H, I, L, M, R and lowercase e, g, o live at ℬ, ℰ, ℱ, ℋ, ℐ,
/// ℒ, ℳ, ℛ, ℯ, ℊ, ℴ in older blocks). Those code points are absent here
/// and pass through unchanged.
const MATH_SCRIPT: &[(char, char)] = &[
    ('\u{1D49C}', 'A'),
    ('\u{1D49E}', 'C'),
    ('\u{1D49F}', 'D'),
    ('\u{1D4A2}', 'G'),
    ('\u{1D4A5}', 'J'),
    ('\u{1D4A6}', 'K'),
    ('\u{1D4A9}', 'N'),
    ('\u{1D4AA}', 'O'),
    ('\u{1D4AB}', 'P'),
    ('\u{1D4AC}', 'Q'),
    ('\u{1D4AE}', 'S'),
    ('\u{1D4AF}', 'T'),
    ('\u{1D4B0}', 'U'),
    ('\u{1D4B1}', 'V'),
    ('\u{1D4B2}', 'W'),
    ('\u{1D4B3}', 'X'),
    ('\u{1D4B4}', 'Y'),
    ('\u{1D4B6}', 'a'),
    ('\u{1D4B7}', 'b'),
    ('\u{1D4B8}', 'c'),
    ('\u{1D4B9}', 'd'),
    ('\u{1D4BB}', 'f'),
    ('\u{1D4BD}', 'h'),
    ('\u{1D4BE}', 'i'),
    ('\u{1D4BF}', 'j'),
    ('\u{1D4C0}', 'k'),
    ('\u{1D4C1}', 'l'),
    ('\u{1D4C2}', 'm'),
    ('\u{1D4C3}', 'n'),
    ('\u{1D4C5}', 'p'),
    ('\u{1D4C6}', 'q'),
    ('\u{1D4C7}', 'r'),
    ('\u{1D4C8}', 's'),
    ('\u{1D4C9}', 't'),
    ('\u{1D4CA}', 'u'),
    ('\u{1D4CB}', 'v'),
    ('\u{1D4CC}', 'w'),
    ('\u{1D4CD}', 'x'),
    ('\u{1D4CE}', 'y'),
    ('\u{1D4CF}', 'z'),
];

/// Mathematical bold script.
const MATH_BOLD_SCRIPT: &[GlyphRange] = &[
    run(0x1D4D0, 0x1D4E9, UPPER_A),
    run(0x1D4EA, 0x1D503, LOWER_A),
];

/// Mathematical fraktur.
const MATH_FRAKTUR: &[GlyphRange] = &[
    run(0x1D504, 0x1D51D, UPPER_A),
    run(0x1D51E, 0x1D537, LOWER_A),
];

/// Mathematical bold fraktur.
const MATH_BOLD_FRAKTUR: &[GlyphRange] = &[
    run(0x1D56C, 0x1D585, UPPER_A),
    run(0x1D586, 0x1D59F, LOWER_A),
];

/// Mathematical double-struck uppercase (𝔸–𝕐).
const MATH_DOUBLE_STRUCK_UPPER: &[GlyphRange] = &[run(0x1D538, 0x1D551, UPPER_A)];

/// Mathematical double-struck lowercase (𝕒–𝕫), kept as a sparse table to
/// mirror how the block was registered historically.
const MATH_DOUBLE_STRUCK_LOWER: &[(char, char)] = &[
    ('\u{1D552}', 'a'),
    ('\u{1D553}', 'b'),
    ('\u{1D554}', 'c'),
    ('\u{1D555}', 'd'),
    ('\u{1D556}', 'e'),
    ('\u{1D557}', 'f'),
    ('\u{1D558}', 'g'),
    ('\u{1D559}', 'h'),
    ('\u{1D55A}', 'i'),
    ('\u{1D55B}', 'j'),
    ('\u{1D55C}', 'k'),
    ('\u{1D55D}', 'l'),
    ('\u{1D55E}', 'm'),
    ('\u{1D55F}', 'n'),
    ('\u{1D560}', 'o'),
    ('\u{1D561}', 'p'),
    ('\u{1D562}', 'q'),
    ('\u{1D563}', 'r'),
    ('\u{1D564}', 's'),
    ('\u{1D565}', 't'),
    ('\u{1D566}', 'u'),
    ('\u{1D567}', 'v'),
    ('\u{1D568}', 'w'),
    ('\u{1D569}', 'x'),
    ('\u{1D56A}', 'y'),
    ('\u{1D56B}', 'z'),
];

/// Mathematical sans-serif.
const SANS_SERIF: &[GlyphRange] = &[
    run(0x1D5A0, 0x1D5B9, UPPER_A),
    run(0x1D5BA, 0x1D5D3, LOWER_A),
];

/// Mathematical sans-serif bold.
const SANS_SERIF_BOLD: &[GlyphRange] = &[
    run(0x1D5D4, 0x1D5ED, UPPER_A),
    run(0x1D5EE, 0x1D607, LOWER_A),
];

/// Mathematical sans-serif italic.
const SANS_SERIF_ITALIC: &[GlyphRange] = &[
    run(0x1D608, 0x1D621, UPPER_A),
    run(0x1D622, 0x1D63B, LOWER_A),
];

/// Mathematical sans-serif bold italic.
const SANS_SERIF_BOLD_ITALIC: &[GlyphRange] = &[
    run(0x1D63C, 0x1D655, UPPER_A),
    run(0x1D656, 0x1D66F, LOWER_A),
];

/// Mathematical monospace.
const MONOSPACE: &[GlyphRange] = &[
    run(0x1D670, 0x1D689, UPPER_A),
    run(0x1D68A, 0x1D6A3, LOWER_A),
];

/// Fullwidth Latin (Ａ–Ｚ, ａ–ｚ).
const FULLWIDTH: &[GlyphRange] = &[
    run(0xFF21, 0xFF3A, UPPER_A),
    run(0xFF41, 0xFF5A, LOWER_A),
];

/// Small capitals.
///
/// 24 entries: no small-caps glyph exists for `g` and `q`, and the font
/// blocks these letters come from have no distinct glyph for `s` and `x`
/// either, so those two map plain ASCII to itself. The `f` entry is the
/// Cyrillic ғ commonly substituted in small-caps text.
const SMALL_CAPS: &[(char, char)] = &[
    ('\u{1D00}', 'a'),
    ('\u{0299}', 'b'),
    ('\u{1D04}', 'c'),
    ('\u{1D05}', 'd'),
    ('\u{1D07}', 'e'),
    ('\u{0493}', 'f'),
    ('\u{029C}', 'h'),
    ('\u{026A}', 'i'),
    ('\u{1D0A}', 'j'),
    ('\u{1D0B}', 'k'),
    ('\u{029F}', 'l'),
    ('\u{1D0D}', 'm'),
    ('\u{0274}', 'n'),
    ('\u{1D0F}', 'o'),
    ('\u{1D18}', 'p'),
    ('\u{0280}', 'r'),
    ('s', 's'),
    ('\u{1D1B}', 't'),
    ('\u{1D1C}', 'u'),
    ('\u{1D20}', 'v'),
    ('\u{1D21}', 'w'),
    ('x', 'x'),
    ('\u{028F}', 'y'),
    ('\u{1D22}', 'z'),
];

/// Circled Latin (Ⓐ–Ⓩ, ⓐ–ⓩ), lowercase first to match the original
/// registration order.
const CIRCLED: &[(char, char)] = &[
    ('\u{24D0}', 'a'),
    ('\u{24D1}', 'b'),
    ('\u{24D2}', 'c'),
    ('\u{24D3}', 'd'),
    ('\u{24D4}', 'e'),
    ('\u{24D5}', 'f'),
    ('\u{24D6}', 'g'),
    ('\u{24D7}', 'h'),
    ('\u{24D8}', 'i'),
    ('\u{24D9}', 'j'),
    ('\u{24DA}', 'k'),
    ('\u{24DB}', 'l'),
    ('\u{24DC}', 'm'),
    ('\u{24DD}', 'n'),
    ('\u{24DE}', 'o'),
    ('\u{24DF}', 'p'),
    ('\u{24E0}', 'q'),
    ('\u{24E1}', 'r'),
    ('\u{24E2}', 's'),
    ('\u{24E3}', 't'),
    ('\u{24E4}', 'u'),
    ('\u{24E5}', 'v'),
    ('\u{24E6}', 'w'),
    ('\u{24E7}', 'x'),
    ('\u{24E8}', 'y'),
    ('\u{24E9}', 'z'),
    ('\u{24B6}', 'A'),
    ('\u{24B7}', 'B'),
    ('\u{24B8}', 'C'),
    ('\u{24B9}', 'D'),
    ('\u{24BA}', 'E'),
    ('\u{24BB}', 'F'),
    ('\u{24BC}', 'G'),
    ('\u{24BD}', 'H'),
    ('\u{24BE}', 'I'),
    ('\u{24BF}', 'J'),
    ('\u{24C0}', 'K'),
    ('\u{24C1}', 'L'),
    ('\u{24C2}', 'M'),
    ('\u{24C3}', 'N'),
    ('\u{24C4}', 'O'),
    ('\u{24C5}', 'P'),
    ('\u{24C6}', 'Q'),
    ('\u{24C7}', 'R'),
    ('\u{24C8}', 'S'),
    ('\u{24C9}', 'T'),
    ('\u{24CA}', 'U'),
    ('\u{24CB}', 'V'),
    ('\u{24CC}', 'W'),
    ('\u{24CD}', 'X'),
    ('\u{24CE}', 'Y'),
    ('\u{24CF}', 'Z'),
];

/// A styled-letter block that the normalizer can fold to ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Block {
    /// Mathematical bold.
    MathBold,
    /// Mathematical italic.
    MathItalic,
    /// Mathematical bold italic.
    MathBoldItalic,
    /// Mathematical script (sparse; see the table notes).
    MathScript,
    /// Mathematical bold script.
    MathBoldScript,
    /// Mathematical fraktur.
    MathFraktur,
    /// Mathematical bold fraktur.
    MathBoldFraktur,
    /// Mathematical double-struck.
    MathDoubleStruck,
    /// Mathematical sans-serif.
    SansSerif,
    /// Mathematical sans-serif bold.
    SansSerifBold,
    /// Mathematical sans-serif italic.
    SansSerifItalic,
    /// Mathematical sans-serif bold italic.
    SansSerifBoldItalic,
    /// Mathematical monospace.
    Monospace,
    /// Fullwidth Latin forms.
    Fullwidth,
    /// Small capitals.
    SmallCaps,
    /// Circled Latin letters.
    Circled,
}

impl Block {
    /// Every supported block, in registration order. Building a map from
    /// this list reproduces the original table exactly, including its
    /// overwrite-wins-last behavior for duplicate keys.
    pub const ALL: [Block; 16] = [
        Block::MathBold,
        Block::MathItalic,
        Block::MathBoldItalic,
        Block::MathScript,
        Block::MathBoldScript,
        Block::MathFraktur,
        Block::MathBoldFraktur,
        Block::MathDoubleStruck,
        Block::SansSerif,
        Block::SansSerifBold,
        Block::SansSerifItalic,
        Block::SansSerifBoldItalic,
        Block::Monospace,
        Block::Fullwidth,
        Block::SmallCaps,
        Block::Circled,
    ];

    /// Contiguous runs belonging to this block. Empty for sparse-only blocks.
    pub fn ranges(self) -> &'static [GlyphRange] {
        match self {
            Block::MathBold => MATH_BOLD,
            Block::MathItalic => MATH_ITALIC,
            Block::MathBoldItalic => MATH_BOLD_ITALIC,
            Block::MathScript => &[],
            Block::MathBoldScript => MATH_BOLD_SCRIPT,
            Block::MathFraktur => MATH_FRAKTUR,
            Block::MathBoldFraktur => MATH_BOLD_FRAKTUR,
            Block::MathDoubleStruck => MATH_DOUBLE_STRUCK_UPPER,
            Block::SansSerif => SANS_SERIF,
            Block::SansSerifBold => SANS_SERIF_BOLD,
            Block::SansSerifItalic => SANS_SERIF_ITALIC,
            Block::SansSerifBoldItalic => SANS_SERIF_BOLD_ITALIC,
            Block::Monospace => MONOSPACE,
            Block::Fullwidth => FULLWIDTH,
            Block::SmallCaps => &[],
            Block::Circled => &[],
        }
    }

    /// Explicit pairs belonging to this block. Empty for range-only blocks.
    pub fn pairs(self) -> &'static [(char, char)] {
        match self {
            Block::MathScript => MATH_SCRIPT,
            Block::MathDoubleStruck => MATH_DOUBLE_STRUCK_LOWER,
            Block::SmallCaps => SMALL_CAPS,
            Block::Circled => CIRCLED,
            _ => &[],
        }
    }

    /// Kebab-case name used by the CLI, configuration files, and `Display`.
    pub fn name(self) -> &'static str {
        match self {
            Block::MathBold => "math-bold",
            Block::MathItalic => "math-italic",
            Block::MathBoldItalic => "math-bold-italic",
            Block::MathScript => "math-script",
            Block::MathBoldScript => "math-bold-script",
            Block::MathFraktur => "math-fraktur",
            Block::MathBoldFraktur => "math-bold-fraktur",
            Block::MathDoubleStruck => "math-double-struck",
            Block::SansSerif => "sans-serif",
            Block::SansSerifBold => "sans-serif-bold",
            Block::SansSerifItalic => "sans-serif-italic",
            Block::SansSerifBoldItalic => "sans-serif-bold-italic",
            Block::Monospace => "monospace",
            Block::Fullwidth => "fullwidth",
            Block::SmallCaps => "small-caps",
            Block::Circled => "circled",
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Block {
    type Err = DefancyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Block::ALL
            .iter()
            .find(|b| b.name() == s)
            .copied()
            .ok_or_else(|| DefancyError::UnknownBlock(s.to_string()))
    }
}
