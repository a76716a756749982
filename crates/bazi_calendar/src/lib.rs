//! Default Calendar Service for BaZi charts.
//!
//! This crate provides:
//! - Apparent solar longitude (VSOP87 Earth series, IAU 2000B nutation)
//! - ΔT (TT − UT) polynomials
//! - Solar-term search by scan and bisection
//! - `AstronomicalCalendar`, the `CalendarService` used by default
//!
//! Supported years are 1600-2400. All moments exchanged with callers are
//! local civil time at the configured UT offset.

pub mod astronomical;
pub mod config;
pub mod delta_t;
pub mod nutation;
pub(crate) mod search;
pub mod solar;
pub mod solar_term;
pub mod vsop87;

pub use astronomical::AstronomicalCalendar;
pub use config::{CalendarConfig, MAX_YEAR, MIN_YEAR};
pub use delta_t::{delta_t_days, delta_t_seconds};
pub use nutation::nutation_in_longitude;
pub use solar::{apparent_solar_longitude, normalize_360, normalize_to_pm180};
pub use solar_term::{
    MEAN_TERM_DAYS, approximate_term_jd, solar_term_jd_tt, solar_term_moment,
};
pub use vsop87::earth_heliocentric;
