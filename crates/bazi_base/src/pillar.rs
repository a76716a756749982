//! Pillars (stem-branch pairs) and the 60-term sexagenary cycle.
//!
//! Only stems and branches of equal parity pair up, giving 60 valid
//! pillars. Index 0 is 甲子, index 59 is 癸亥. The cycle position of a
//! pillar is the unique `i` with `i ≡ stem (mod 10)` and `i ≡ branch (mod 12)`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::branch::{ALL_BRANCHES, Branch};
use crate::error::ParseError;
use crate::stem::{ALL_STEMS, Stem};

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: u8 = 60;

/// A stem-branch pair. Always one of the 60 cycle terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

/// All 60 pillars in cycle order (0 = 甲子).
pub const SEXAGENARY_CYCLE: [Pillar; 60] = build_cycle();

const fn build_cycle() -> [Pillar; 60] {
    let mut out = [Pillar {
        stem: Stem::Jia,
        branch: Branch::Zi,
    }; 60];
    let mut i = 0;
    while i < 60 {
        out[i] = Pillar {
            stem: ALL_STEMS[i % 10],
            branch: ALL_BRANCHES[i % 12],
        };
        i += 1;
    }
    out
}

/// Epoch for the year cycle: CE 4 was a 甲子 year.
pub const YEAR_CYCLE_EPOCH: i32 = 4;

/// Julian Day Number offset for the day cycle: JDN 11 was a 甲子 day.
pub const DAY_CYCLE_EPOCH_JDN: i64 = 11;

/// First-month (寅) stem for each year stem, indexed by year-stem index.
///
/// Five-tiger rule: 甲己→丙, 乙庚→戊, 丙辛→庚, 丁壬→壬, 戊癸→甲.
pub const MONTH_START_STEMS: [Stem; 10] = [
    Stem::Bing,
    Stem::Wu,
    Stem::Geng,
    Stem::Ren,
    Stem::Jia,
    Stem::Bing,
    Stem::Wu,
    Stem::Geng,
    Stem::Ren,
    Stem::Jia,
];

impl Pillar {
    /// Pair a stem and branch. `None` if their parities differ.
    pub const fn new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// Pillar at a cycle position (wraps mod 60).
    pub const fn from_cycle_index(i: u8) -> Self {
        SEXAGENARY_CYCLE[(i % CYCLE_LEN) as usize]
    }

    /// Pair a stem and branch already known to share parity.
    pub(crate) const fn from_stem_branch(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    pub const fn stem(&self) -> Stem {
        self.stem
    }

    pub const fn branch(&self) -> Branch {
        self.branch
    }

    /// 0-based cycle position (甲子=0 .. 癸亥=59).
    pub const fn cycle_index(&self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// Pillar `steps` positions away in the cycle, either direction.
    pub const fn offset(&self, steps: i32) -> Self {
        Self::from_cycle_index((self.cycle_index() as i32 + steps).rem_euclid(60) as u8)
    }

    /// Plain cycle position of a year number, `(year - 4) mod 60`.
    ///
    /// This ignores the Spring solar-term boundary; it is the pillar of
    /// the sexagenary year that *starts* in `year`.
    pub const fn for_year_number(year: i32) -> Self {
        Self::from_cycle_index((year - YEAR_CYCLE_EPOCH).rem_euclid(60) as u8)
    }

    /// Day pillar for a Julian Day Number.
    pub const fn for_day_number(jdn: i64) -> Self {
        Self::from_cycle_index((jdn - DAY_CYCLE_EPOCH_JDN).rem_euclid(60) as u8)
    }

    /// The two glyphs, e.g. `甲子`.
    pub fn glyphs(&self) -> String {
        format!("{}{}", self.stem.glyph(), self.branch.glyph())
    }

    /// Pinyin, e.g. `Jia-Zi`.
    pub fn pinyin(&self) -> String {
        format!("{}-{}", self.stem.name(), self.branch.name())
    }
}

/// Month pillar from the year stem and the month branch.
///
/// The month branch comes from solar-term boundaries (寅 starts at 立春).
/// The stem follows the five-tiger rule from the year stem.
pub const fn month_pillar(year_stem: Stem, month_branch: Branch) -> Pillar {
    let months_since_yin = (month_branch.index() + 12 - Branch::Yin.index()) % 12;
    let start = MONTH_START_STEMS[year_stem.index() as usize];
    Pillar {
        stem: start.offset(months_since_yin as i32),
        branch: month_branch,
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.glyph(), self.branch.glyph())
    }
}

/// Parses two glyphs (`甲子`) or pinyin joined by `-` (`Jia-Zi`).
impl FromStr for Pillar {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (stem, branch) = if let Some((a, b)) = s.split_once('-') {
            (a.parse::<Stem>()?, b.parse::<Branch>()?)
        } else {
            let mut chars = s.chars();
            let (Some(a), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
                return Err(ParseError::Pillar(s.to_string()));
            };
            let stem = Stem::from_glyph(a).ok_or_else(|| ParseError::Stem(a.to_string()))?;
            let branch = Branch::from_glyph(b).ok_or_else(|| ParseError::Branch(b.to_string()))?;
            (stem, branch)
        };
        Pillar::new(stem, branch).ok_or_else(|| ParseError::Pillar(s.to_string()))
    }
}
