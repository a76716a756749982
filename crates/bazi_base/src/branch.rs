//! The twelve Earthly Branches (地支).
//!
//! Branches cycle with period 12 starting at Zi (子, Rat). The four
//! "storehouse" branches 丑辰未戌 all map to Earth.

use std::str::FromStr;

use crate::element::Element;
use crate::error::ParseError;
use crate::stem::Polarity;

/// One of the twelve Earthly Branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (0 = Zi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

/// Element of each branch, indexed by branch index.
pub const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water, // Zi
    Element::Earth, // Chou
    Element::Wood,  // Yin
    Element::Wood,  // Mao
    Element::Earth, // Chen
    Element::Fire,  // Si
    Element::Fire,  // Wu
    Element::Earth, // Wei
    Element::Metal, // Shen
    Element::Metal, // You
    Element::Earth, // Xu
    Element::Water, // Hai
];

const BRANCH_GLYPHS: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const BRANCH_NAMES: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

const BRANCH_ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

impl Branch {
    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at a cycle position (wraps mod 12).
    pub const fn from_index(i: u8) -> Self {
        ALL_BRANCHES[(i % 12) as usize]
    }

    pub const fn glyph(self) -> &'static str {
        BRANCH_GLYPHS[self.index() as usize]
    }

    pub const fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    /// Zodiac animal.
    pub const fn animal(self) -> &'static str {
        BRANCH_ANIMALS[self.index() as usize]
    }

    pub const fn element(self) -> Element {
        BRANCH_ELEMENTS[self.index() as usize]
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    pub const fn offset(self, steps: i32) -> Self {
        Self::from_index((self.index() as i32 + steps).rem_euclid(12) as u8)
    }

    pub fn from_glyph(c: char) -> Option<Self> {
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.glyph().starts_with(c))
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Accepts the glyph (`子`) or the pinyin name (`Zi`, case-insensitive).
impl FromStr for Branch {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.glyph() == s || b.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::Branch(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(Branch::from_index(i as u8), *b);
        }
    }

    #[test]
    fn four_earth_branches() {
        let earth: Vec<Branch> = ALL_BRANCHES
            .iter()
            .copied()
            .filter(|b| b.element() == Element::Earth)
            .collect();
        assert_eq!(earth, vec![Branch::Chou, Branch::Chen, Branch::Wei, Branch::Xu]);
    }

    #[test]
    fn every_element_except_earth_has_two_branches() {
        for e in [Element::Wood, Element::Fire, Element::Metal, Element::Water] {
            let n = ALL_BRANCHES.iter().filter(|b| b.element() == e).count();
            assert_eq!(n, 2, "{e}");
        }
    }

    #[test]
    fn animals() {
        assert_eq!(Branch::Zi.animal(), "Rat");
        assert_eq!(Branch::Chen.animal(), "Dragon");
        assert_eq!(Branch::Hai.animal(), "Pig");
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(Branch::Hai.offset(1), Branch::Zi);
        assert_eq!(Branch::Zi.offset(-1), Branch::Hai);
        assert_eq!(Branch::Yin.offset(-14), Branch::Zi);
    }

    #[test]
    fn glyph_roundtrip() {
        for b in ALL_BRANCHES {
            assert_eq!(b.glyph().parse::<Branch>().unwrap(), b);
            let c = b.glyph().chars().next().unwrap();
            assert_eq!(Branch::from_glyph(c), Some(b));
        }
        assert_eq!("you".parse::<Branch>().unwrap(), Branch::You);
    }
}
