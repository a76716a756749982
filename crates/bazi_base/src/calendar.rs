//! Calendar Service contract and solar-term table types.
//!
//! The chart engine never does solar astronomy itself. Year, month and day
//! pillars and the per-year solar-term table come from a [`CalendarService`]
//! implementation that is injected by the caller (the default one lives in
//! the `bazi_calendar` crate; tests use fixed tables).

use bazi_time::CivilDateTime;

use crate::branch::Branch;
use crate::error::CalendarError;
use crate::pillar::Pillar;

/// Solar-term-correct year, month and day pillars of a moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SexagenaryDate {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
}

/// External calendrical capability the chart engine depends on.
///
/// Moments are local civil time on both sides of the contract.
pub trait CalendarService {
    /// Year, month and day pillars of `moment`.
    ///
    /// The year pillar changes at 立春 (Beginning of Spring), the month
    /// pillar at each of the twelve month-boundary solar terms.
    fn sexagenary_date(&self, moment: &CivilDateTime) -> Result<SexagenaryDate, CalendarError>;

    /// All 24 solar terms whose moments fall in Gregorian `year`.
    fn solar_terms(&self, year: i32) -> Result<SolarTermTable, CalendarError>;
}

/// The 24 solar terms (节气) in the order they occur in a Gregorian year,
/// starting from 小寒 (Minor Cold, early January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SolarTerm {
    MinorCold,
    MajorCold,
    BeginningOfSpring,
    RainWater,
    AwakeningOfInsects,
    SpringEquinox,
    PureBrightness,
    GrainRain,
    BeginningOfSummer,
    GrainFull,
    GrainInEar,
    SummerSolstice,
    MinorHeat,
    MajorHeat,
    BeginningOfAutumn,
    EndOfHeat,
    WhiteDew,
    AutumnEquinox,
    ColdDew,
    FrostsDescent,
    BeginningOfWinter,
    MinorSnow,
    MajorSnow,
    WinterSolstice,
}

/// All 24 solar terms in calendar-year order (0 = 小寒).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::MinorCold,
    SolarTerm::MajorCold,
    SolarTerm::BeginningOfSpring,
    SolarTerm::RainWater,
    SolarTerm::AwakeningOfInsects,
    SolarTerm::SpringEquinox,
    SolarTerm::PureBrightness,
    SolarTerm::GrainRain,
    SolarTerm::BeginningOfSummer,
    SolarTerm::GrainFull,
    SolarTerm::GrainInEar,
    SolarTerm::SummerSolstice,
    SolarTerm::MinorHeat,
    SolarTerm::MajorHeat,
    SolarTerm::BeginningOfAutumn,
    SolarTerm::EndOfHeat,
    SolarTerm::WhiteDew,
    SolarTerm::AutumnEquinox,
    SolarTerm::ColdDew,
    SolarTerm::FrostsDescent,
    SolarTerm::BeginningOfWinter,
    SolarTerm::MinorSnow,
    SolarTerm::MajorSnow,
    SolarTerm::WinterSolstice,
];

const SOLAR_TERM_GLYPHS: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至",
    "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

const SOLAR_TERM_NAMES: [&str; 24] = [
    "Minor Cold",
    "Major Cold",
    "Beginning of Spring",
    "Rain Water",
    "Awakening of Insects",
    "Spring Equinox",
    "Pure Brightness",
    "Grain Rain",
    "Beginning of Summer",
    "Grain Full",
    "Grain in Ear",
    "Summer Solstice",
    "Minor Heat",
    "Major Heat",
    "Beginning of Autumn",
    "End of Heat",
    "White Dew",
    "Autumn Equinox",
    "Cold Dew",
    "Frost's Descent",
    "Beginning of Winter",
    "Minor Snow",
    "Major Snow",
    "Winter Solstice",
];

impl SolarTerm {
    /// 0-based index in calendar-year order (小寒=0 .. 冬至=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(i: u8) -> Self {
        ALL_SOLAR_TERMS[(i % 24) as usize]
    }

    pub const fn name(self) -> &'static str {
        SOLAR_TERM_NAMES[self.index() as usize]
    }

    pub const fn glyph(self) -> &'static str {
        SOLAR_TERM_GLYPHS[self.index() as usize]
    }

    /// Apparent solar ecliptic longitude at which the term begins, degrees.
    ///
    /// 小寒 is 285°, each following term 15° further, 春分 is 0°.
    pub const fn longitude_deg(self) -> f64 {
        ((285 + 15 * self.index() as u32) % 360) as f64
    }

    /// True for the twelve month-boundary terms (节): 小寒, 立春, 惊蛰, ...
    pub const fn is_month_boundary(self) -> bool {
        self.index() % 2 == 0
    }

    /// Branch of the month that a month-boundary term opens.
    ///
    /// 小寒 opens 丑, 立春 opens 寅, ..., 大雪 opens 子. `None` for the
    /// mid-month terms (中气).
    pub const fn month_branch(self) -> Option<Branch> {
        if self.is_month_boundary() {
            Some(Branch::Chou.offset((self.index() / 2) as i32))
        } else {
            None
        }
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// One solar term and the local civil moment it begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarTermEvent {
    pub term: SolarTerm,
    pub moment: CivilDateTime,
}

/// The solar terms of one Gregorian year, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolarTermTable {
    pub year: i32,
    pub events: Vec<SolarTermEvent>,
}

impl SolarTermTable {
    /// Build a table, sorting events chronologically.
    pub fn new(year: i32, mut events: Vec<SolarTermEvent>) -> Self {
        events.sort_by_key(|e| e.moment);
        Self { year, events }
    }

    /// Event for a specific term, if present.
    pub fn event(&self, term: SolarTerm) -> Option<&SolarTermEvent> {
        self.events.iter().find(|e| e.term == term)
    }

    /// Month-boundary events only, chronological.
    pub fn month_boundaries(&self) -> impl Iterator<Item = &SolarTermEvent> {
        self.events.iter().filter(|e| e.term.is_month_boundary())
    }

    /// First month boundary strictly after `moment`.
    pub fn next_boundary_after(&self, moment: &CivilDateTime) -> Option<&SolarTermEvent> {
        self.month_boundaries().find(|e| e.moment > *moment)
    }

    /// Last month boundary strictly before `moment`.
    pub fn prev_boundary_before(&self, moment: &CivilDateTime) -> Option<&SolarTermEvent> {
        self.month_boundaries().filter(|e| e.moment < *moment).last()
    }

    /// Last month boundary at or before `moment` (the boundary that opened
    /// the solar month containing `moment`).
    pub fn boundary_at_or_before(&self, moment: &CivilDateTime) -> Option<&SolarTermEvent> {
        self.month_boundaries().filter(|e| e.moment <= *moment).last()
    }
}
