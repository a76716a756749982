//! Five-Element Scorer: weighted element profile of a chart.
//!
//! Seven of the eight chart characters contribute a fixed weight to the
//! element they belong to. The day stem is the subject itself and is not
//! counted. Weights sum to 100.

use crate::chart::BaziChart;
use crate::element::{ALL_ELEMENTS, Element};

/// Score above which the subject is classified [`BodyStrength::Strong`].
pub const BODY_STRENGTH_THRESHOLD: u32 = 50;

/// One of the eight characters of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartPosition {
    YearStem,
    YearBranch,
    MonthStem,
    MonthBranch,
    DayStem,
    DayBranch,
    HourStem,
    HourBranch,
}

/// All 8 positions in chart order.
pub const ALL_POSITIONS: [ChartPosition; 8] = [
    ChartPosition::YearStem,
    ChartPosition::YearBranch,
    ChartPosition::MonthStem,
    ChartPosition::MonthBranch,
    ChartPosition::DayStem,
    ChartPosition::DayBranch,
    ChartPosition::HourStem,
    ChartPosition::HourBranch,
];

/// Score weight per position, indexed like [`ALL_POSITIONS`].
pub const POSITION_WEIGHTS: [u32; 8] = [8, 4, 12, 40, 0, 12, 12, 12];

impl ChartPosition {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn weight(self) -> u32 {
        POSITION_WEIGHTS[self.index() as usize]
    }

    /// Element of the character at this position of `chart`.
    pub fn element_in(self, chart: &BaziChart) -> Element {
        match self {
            Self::YearStem => chart.year().stem().element(),
            Self::YearBranch => chart.year().branch().element(),
            Self::MonthStem => chart.month().stem().element(),
            Self::MonthBranch => chart.month().branch().element(),
            Self::DayStem => chart.day().stem().element(),
            Self::DayBranch => chart.day().branch().element(),
            Self::HourStem => chart.hour().stem().element(),
            Self::HourBranch => chart.hour().branch().element(),
        }
    }
}

/// Per-element weighted scores. Every element is present (default 0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ElementScores([u32; 5]);

impl ElementScores {
    pub const fn get(&self, element: Element) -> u32 {
        self.0[element.index() as usize]
    }

    pub fn add(&mut self, element: Element, amount: u32) {
        self.0[element.index() as usize] += amount;
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// `(element, score)` pairs in canonical element order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        ALL_ELEMENTS.iter().map(|&e| (e, self.get(e)))
    }

    /// Elements sorted by ascending score; ties keep canonical order.
    pub fn ascending(&self) -> [Element; 5] {
        let mut out = ALL_ELEMENTS;
        out.sort_by_key(|&e| self.get(e));
        out
    }
}

/// Binary strength classification of the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyStrength {
    Strong,
    Weak,
}

impl BodyStrength {
    /// Strong iff `subject_score` exceeds [`BODY_STRENGTH_THRESHOLD`].
    pub const fn classify(subject_score: u32) -> Self {
        if subject_score > BODY_STRENGTH_THRESHOLD {
            Self::Strong
        } else {
            Self::Weak
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Weak => "Weak",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Strong => "身强",
            Self::Weak => "身弱",
        }
    }
}

impl std::fmt::Display for BodyStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Scores plus everything derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementProfile {
    pub scores: ElementScores,
    /// Element of the day stem.
    pub subject: Element,
    pub body_strength: BodyStrength,
    /// Last element after a stable ascending sort by score.
    pub strongest: Element,
    /// First element after a stable ascending sort by score.
    pub weakest: Element,
}

impl ElementProfile {
    pub const fn subject_score(&self) -> u32 {
        self.scores.get(self.subject)
    }
}

/// Weighted element scores of a chart.
pub fn element_scores(chart: &BaziChart) -> ElementScores {
    let mut scores = ElementScores::default();
    for pos in ALL_POSITIONS {
        scores.add(pos.element_in(chart), pos.weight());
    }
    scores
}

/// Full element profile of a chart.
///
/// Ties for strongest resolve to the tied element latest in
/// Wood-Fire-Earth-Metal-Water order; ties for weakest to the earliest.
pub fn element_profile(chart: &BaziChart) -> ElementProfile {
    let scores = element_scores(chart);
    let subject = chart.day_master().element();
    let sorted = scores.ascending();
    ElementProfile {
        scores,
        subject,
        body_strength: BodyStrength::classify(scores.get(subject)),
        strongest: sorted[4],
        weakest: sorted[0],
    }
}
