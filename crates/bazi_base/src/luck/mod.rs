//! Luck Pillar Engine (大运).
//!
//! - Direction: from year-stem polarity and gender.
//! - Onset age: from the day distance between birth and the nearest
//!   month-boundary solar term in the walk direction (3 days = 1 year).
//! - Sequence: ten decade-long pillars walked from the month pillar.

pub mod onset;
pub mod sequence;
pub mod types;

pub use onset::{
    DAYS_PER_LUCK_YEAR, DEFAULT_ONSET_YEARS, MONTHS_PER_DAY, boundary_distance_days, onset_age,
    onset_from_days,
};
pub use sequence::{LUCK_PILLAR_COUNT, LUCK_PILLAR_SPAN, luck_direction, luck_pillars, luck_sequence};
pub use types::{LuckDirection, LuckPillar, LuckPillars, OnsetAge};
