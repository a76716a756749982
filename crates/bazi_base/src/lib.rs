//! Four Pillars (八字) chart mathematics.
//!
//! This crate provides:
//! - Stems, branches, elements and the 60-term sexagenary cycle
//! - The `CalendarService` contract and solar-term table types
//! - Pillar Calculator: hour pillar and chart assembly
//! - Five-Element Scorer: weighted element profile and body strength
//! - Luck Pillar Engine: direction, onset age and the decade sequence
//! - Fortune Curve Synthesizer: per-age fortune score and peak window
//! - Career recommendation from the element profile
//!
//! Everything here is synchronous and deterministic. Solar astronomy is
//! injected through [`CalendarService`].

pub mod branch;
pub mod calendar;
pub mod career;
pub mod chart;
pub mod element;
pub mod error;
pub mod fortune;
pub mod luck;
pub mod pillar;
pub mod stem;
pub mod strength;

pub use branch::{ALL_BRANCHES, BRANCH_ELEMENTS, Branch};
pub use calendar::{
    ALL_SOLAR_TERMS, CalendarService, SexagenaryDate, SolarTerm, SolarTermEvent, SolarTermTable,
};
pub use career::{CareerRecommendation, career_recommendation, favorable_elements};
pub use chart::{BaziChart, Gender, HOUR_START_STEMS, calculate_chart, hour_pillar, hour_slot};
pub use element::{
    ALL_ELEMENTS, Element, ElementRelation, INTERACTION, interaction_coefficient,
    relation_coefficient,
};
pub use error::{CalendarError, ParseError};
pub use fortune::{
    CURRENT_AGE, FortuneConfig, FortuneCurve, FortunePoint, FortuneTag, FortuneTrend, MAX_AGE,
    PeakWindow, annual_pillar, fortune_curve, fortune_score, peak_window,
};
pub use luck::{
    DEFAULT_ONSET_YEARS, LUCK_PILLAR_COUNT, LUCK_PILLAR_SPAN, LuckDirection, LuckPillar,
    LuckPillars, OnsetAge, luck_direction, luck_pillars, luck_sequence, onset_age,
    onset_from_days,
};
pub use pillar::{CYCLE_LEN, MONTH_START_STEMS, Pillar, SEXAGENARY_CYCLE, month_pillar};
pub use stem::{ALL_STEMS, Polarity, STEM_ELEMENTS, Stem};
pub use strength::{
    BODY_STRENGTH_THRESHOLD, BodyStrength, ChartPosition, ElementProfile, ElementScores,
    element_profile, element_scores,
};
