//! Moments of the 24 solar terms.
//!
//! A term begins when the Sun's apparent longitude reaches a multiple of
//! 15°. The crossing is bracketed by a coarse scan around a mean-motion
//! estimate and refined by bisection in TT, then shifted to UT with ΔT and
//! to the local civil clock with the configured offset.

use bazi_base::{CalendarError, SolarTerm};
use bazi_time::{CivilDateTime, calendar_to_jd};
use tracing::warn;

use crate::config::{CalendarConfig, MAX_YEAR, MIN_YEAR};
use crate::delta_t::delta_t_days;
use crate::search::find_zero_crossing;
use crate::solar::{apparent_solar_longitude, normalize_to_pm180};

/// Mean interval between consecutive solar terms, days.
pub const MEAN_TERM_DAYS: f64 = 15.2184;

/// Half-width of the scan window around the estimate, days.
const SEARCH_HALF_WINDOW_DAYS: f64 = 8.0;

/// Mean-motion estimate (TT Julian Date) of a term in `year`.
///
/// 小寒 falls near January 6, later terms follow every [`MEAN_TERM_DAYS`].
pub fn approximate_term_jd(year: i32, term: SolarTerm) -> f64 {
    calendar_to_jd(year, 1, 6.0) + term.index() as f64 * MEAN_TERM_DAYS
}

/// TT Julian Date at which `term` begins in Gregorian `year`.
///
/// Accepts one year beyond the supported range on either side so that
/// boundary lookups at the range edges can reach the adjacent year.
pub fn solar_term_jd_tt(
    year: i32,
    term: SolarTerm,
    config: &CalendarConfig,
) -> Result<f64, CalendarError> {
    if year < MIN_YEAR - 1 || year > MAX_YEAR + 1 {
        return Err(CalendarError::OutOfRange { year });
    }
    let target = term.longitude_deg();
    let f = |t: f64| normalize_to_pm180(apparent_solar_longitude(t) - target);

    let start = approximate_term_jd(year, term) - SEARCH_HALF_WINDOW_DAYS;
    let max_steps = (2.0 * SEARCH_HALF_WINDOW_DAYS / config.step_size_days).ceil() as usize;
    find_zero_crossing(
        &f,
        start,
        config.step_size_days,
        max_steps,
        config.max_iterations,
        config.convergence_days,
    )
    .ok_or_else(|| {
        warn!(year, term = term.name(), "solar term crossing not bracketed");
        CalendarError::NoConvergence("solar term crossing not bracketed")
    })
}

/// Local civil moment (minute resolution) at which `term` begins in `year`.
pub fn solar_term_moment(
    year: i32,
    term: SolarTerm,
    config: &CalendarConfig,
) -> Result<CivilDateTime, CalendarError> {
    let jd_tt = solar_term_jd_tt(year, term, config)?;
    let decimal_year = year as f64 + (term.index() as f64 + 0.5) / 24.0;
    let jd_ut = jd_tt - delta_t_days(decimal_year);
    let jd_local = jd_ut + config.utc_offset_hours / 24.0;
    Ok(CivilDateTime::from_jd(jd_local)?)
}
