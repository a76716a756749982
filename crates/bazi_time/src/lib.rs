//! Civil (local-clock) date-time handling for chart computation.
//!
//! This crate provides:
//! - `CivilDateTime`, a timezone-naive local date and time at minute resolution
//! - Parsing of the `YYYY-MM-DD` / `HH:mm` chart input strings
//! - Julian Day ↔ proleptic Gregorian calendar conversions
//!
//! No timezone or daylight-saving modelling is done here: a `CivilDateTime`
//! is whatever the wall clock showed at the birth place.

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::CivilDateTime;
pub use error::TimeError;
pub use julian::{J2000_JD, MINUTES_PER_DAY, calendar_to_jd, jd_to_calendar, julian_day_number};
