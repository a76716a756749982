//! Convenience wrapper for BaZi chart computation.
//!
//! One call from the `YYYY-MM-DD` / `HH:mm` input strings to a full
//! [`Reading`]: chart, element profile, luck pillars, fortune curve and
//! career recommendation, using [`AstronomicalCalendar`] at UTC+8.
//!
//! ```rust,ignore
//! use bazi_rs::*;
//!
//! let r = reading("1990-05-15", "10:00", Gender::Male).unwrap();
//! println!("{} ({})", r.chart, r.profile.body_strength);
//! ```

pub mod convenience;
pub mod error;

pub use convenience::{
    Reading, chart, reading, reading_from_strs, reading_with, solar_terms, try_reading,
};
pub use error::BaziError;

// Re-export the types a reading exposes so callers need only this crate.
pub use bazi_base::{
    BaziChart, BodyStrength, CalendarService, CareerRecommendation, Element, ElementProfile,
    FortuneConfig, FortuneCurve, FortunePoint, FortuneTag, FortuneTrend, Gender, LuckDirection,
    LuckPillar, LuckPillars, OnsetAge, ParseError, PeakWindow, Pillar, SolarTerm, SolarTermTable,
};
pub use bazi_calendar::{AstronomicalCalendar, CalendarConfig};
pub use bazi_time::CivilDateTime;
