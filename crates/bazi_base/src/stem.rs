//! The ten Heavenly Stems (天干).
//!
//! Stems cycle with period 10. Even indices (甲丙戊庚壬) are yang,
//! odd indices (乙丁己辛癸) are yin. Consecutive pairs share an element.

use std::str::FromStr;

use crate::element::Element;
use crate::error::ParseError;

/// One of the ten Heavenly Stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (0 = Jia).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

/// Element of each stem, indexed by stem index.
pub const STEM_ELEMENTS: [Element; 10] = [
    Element::Wood,
    Element::Wood,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Water,
    Element::Water,
];

const STEM_GLYPHS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const STEM_NAMES: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

/// Yin/yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity of a cycle index: even = yang, odd = yin.
    pub const fn from_index(i: u8) -> Self {
        if i % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}

impl Stem {
    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at a cycle position (wraps mod 10).
    pub const fn from_index(i: u8) -> Self {
        ALL_STEMS[(i % 10) as usize]
    }

    /// Chinese glyph.
    pub const fn glyph(self) -> &'static str {
        STEM_GLYPHS[self.index() as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    pub const fn element(self) -> Element {
        STEM_ELEMENTS[self.index() as usize]
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    pub const fn is_yang(self) -> bool {
        matches!(self.polarity(), Polarity::Yang)
    }

    /// Stem `steps` positions away, walking the cycle in either direction.
    pub const fn offset(self, steps: i32) -> Self {
        Self::from_index((self.index() as i32 + steps).rem_euclid(10) as u8)
    }

    /// Look up a stem from its glyph.
    pub fn from_glyph(c: char) -> Option<Self> {
        ALL_STEMS
            .iter()
            .copied()
            .find(|s| s.glyph().starts_with(c))
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Accepts the glyph (`甲`) or the pinyin name (`Jia`, case-insensitive).
impl FromStr for Stem {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_STEMS
            .iter()
            .copied()
            .find(|st| st.glyph() == s || st.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::Stem(s.to_string()))
    }
}
