//! Core types for luck pillar calculations.

use crate::pillar::Pillar;

/// Walk direction through the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LuckDirection {
    Forward,
    Reverse,
}

impl LuckDirection {
    /// +1 for forward, -1 for reverse.
    pub const fn step(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "Forward",
            Self::Reverse => "Reverse",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Forward => "顺行",
            Self::Reverse => "逆行",
        }
    }
}

impl std::fmt::Display for LuckDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Age at which the first luck pillar begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnsetAge {
    /// Whole years, never below 1.
    pub years: u32,
    /// Months past `years`, 0..=11.
    pub months: u32,
    /// Raw day distance to the solar-term boundary (0 for the fallback).
    pub days: f64,
    /// True when the calendar could not resolve a boundary and the fixed
    /// default onset was used.
    pub is_fallback: bool,
}

impl OnsetAge {
    /// Human-readable `"Y years M months"`.
    pub fn detail(&self) -> String {
        format!("{} years {} months", self.years, self.months)
    }
}

impl std::fmt::Display for OnsetAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.detail())
    }
}

/// One decade-long luck pillar and its inclusive age window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LuckPillar {
    pub pillar: Pillar,
    pub start_age: u32,
    pub end_age: u32,
}

impl LuckPillar {
    pub const fn contains(&self, age: u32) -> bool {
        age >= self.start_age && age <= self.end_age
    }

    /// Inclusive calendar-year window for a subject born in `birth_year`.
    pub const fn calendar_years(&self, birth_year: i32) -> (i32, i32) {
        (
            birth_year + self.start_age as i32,
            birth_year + self.end_age as i32,
        )
    }
}

/// Direction, onset and the ordered luck pillars of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LuckPillars {
    pub direction: LuckDirection,
    pub onset: OnsetAge,
    pub pillars: Vec<LuckPillar>,
}

impl LuckPillars {
    /// Luck pillar governing `age`.
    ///
    /// Ages before the onset use the first pillar; ages past the last
    /// window use the last one. `None` only when the sequence is empty.
    pub fn active_at(&self, age: u32) -> Option<&LuckPillar> {
        let first = self.pillars.first()?;
        if age < first.start_age {
            return Some(first);
        }
        self.pillars
            .iter()
            .find(|lp| lp.contains(age))
            .or_else(|| self.pillars.last())
    }
}
