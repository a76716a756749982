//! Onset age of the first luck pillar (起运).
//!
//! The day distance from birth to the nearest month-boundary solar term is
//! converted at 3 days per year, with the remainder at 4 months per day.

use bazi_time::CivilDateTime;
use tracing::warn;

use super::types::{LuckDirection, OnsetAge};
use crate::calendar::CalendarService;
use crate::error::CalendarError;

/// Onset used when no solar-term boundary can be resolved.
pub const DEFAULT_ONSET_YEARS: u32 = 4;

/// Days of boundary distance per year of onset age.
pub const DAYS_PER_LUCK_YEAR: f64 = 3.0;

/// Months of onset age per remaining day.
pub const MONTHS_PER_DAY: f64 = 4.0;

/// Convert a day distance to an onset age.
///
/// Whole years are floored and clamped to a minimum of 1. Months come from
/// the remainder after whole 3-day blocks and are kept as computed when the
/// year count is clamped.
pub fn onset_from_days(days: f64) -> OnsetAge {
    let days = days.abs();
    let whole = (days / DAYS_PER_LUCK_YEAR).floor();
    let remainder = days - whole * DAYS_PER_LUCK_YEAR;
    let months = ((remainder * MONTHS_PER_DAY).floor() as u32).min(11);
    OnsetAge {
        years: (whole as u32).max(1),
        months,
        days,
        is_fallback: false,
    }
}

/// Fixed onset used when the calendar cannot resolve a boundary.
pub const fn fallback_onset() -> OnsetAge {
    OnsetAge {
        years: DEFAULT_ONSET_YEARS,
        months: 0,
        days: 0.0,
        is_fallback: true,
    }
}

/// Absolute day distance from `birth` to the nearest month-boundary term
/// strictly after it (forward) or strictly before it (reverse).
///
/// Searches the birth year's term table first, then the adjacent year.
pub fn boundary_distance_days<C>(
    birth: &CivilDateTime,
    direction: LuckDirection,
    calendar: &C,
) -> Result<f64, CalendarError>
where
    C: CalendarService + ?Sized,
{
    let table = calendar.solar_terms(birth.year)?;
    let boundary = match direction {
        LuckDirection::Forward => match table.next_boundary_after(birth) {
            Some(e) => e.moment,
            None => calendar
                .solar_terms(birth.year + 1)?
                .next_boundary_after(birth)
                .map(|e| e.moment)
                .ok_or(CalendarError::NoBoundary("after"))?,
        },
        LuckDirection::Reverse => match table.prev_boundary_before(birth) {
            Some(e) => e.moment,
            None => calendar
                .solar_terms(birth.year - 1)?
                .prev_boundary_before(birth)
                .map(|e| e.moment)
                .ok_or(CalendarError::NoBoundary("before"))?,
        },
    };
    Ok(birth.days_until(&boundary).abs())
}

/// Onset age for a birth moment and walk direction.
///
/// Calendar failures degrade to [`DEFAULT_ONSET_YEARS`] with
/// `is_fallback` set.
pub fn onset_age<C>(birth: &CivilDateTime, direction: LuckDirection, calendar: &C) -> OnsetAge
where
    C: CalendarService + ?Sized,
{
    match boundary_distance_days(birth, direction, calendar) {
        Ok(days) => onset_from_days(days),
        Err(e) => {
            warn!(
                birth = %birth,
                %direction,
                error = %e,
                "onset boundary unresolved, using default onset"
            );
            fallback_onset()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{SexagenaryDate, SolarTerm, SolarTermEvent, SolarTermTable};

    struct TermsOnly {
        tables: Vec<SolarTermTable>,
    }

    impl CalendarService for TermsOnly {
        fn sexagenary_date(&self, _: &CivilDateTime) -> Result<SexagenaryDate, CalendarError> {
            Err(CalendarError::InvalidPillar("not used".into()))
        }

        fn solar_terms(&self, year: i32) -> Result<SolarTermTable, CalendarError> {
            self.tables
                .iter()
                .find(|t| t.year == year)
                .cloned()
                .ok_or(CalendarError::OutOfRange { year })
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> CivilDateTime {
        CivilDateTime::new(y, m, d, h, min).unwrap()
    }

    fn ev(term: SolarTerm, moment: CivilDateTime) -> SolarTermEvent {
        SolarTermEvent { term, moment }
    }

    fn calendar() -> TermsOnly {
        TermsOnly {
            tables: vec![
                SolarTermTable::new(
                    2023,
                    vec![ev(SolarTerm::MajorSnow, at(2023, 12, 7, 17, 33))],
                ),
                SolarTermTable::new(
                    2024,
                    vec![
                        ev(SolarTerm::MinorCold, at(2024, 1, 6, 4, 49)),
                        ev(SolarTerm::MajorCold, at(2024, 1, 20, 22, 7)),
                        ev(SolarTerm::BeginningOfSpring, at(2024, 2, 4, 16, 27)),
                        ev(SolarTerm::MajorSnow, at(2024, 12, 6, 23, 17)),
                    ],
                ),
            ],
        }
    }

    // ── conversion ──

    #[test]
    fn conversion_examples() {
        let o = onset_from_days(10.5);
        assert_eq!(o.years, 3);
        assert_eq!(o.months, 6);
        let o = onset_from_days(29.9);
        assert_eq!(o.years, 9);
        assert_eq!(o.months, 11);
        let o = onset_from_days(6.0);
        assert_eq!(o.years, 2);
        assert_eq!(o.months, 0);
    }

    #[test]
    fn never_below_one_year() {
        for d in [0.0, 0.2, 1.0, 2.99] {
            assert_eq!(onset_from_days(d).years, 1, "days={d}");
        }
        assert_eq!(onset_from_days(2.5).months, 10);
    }

    #[test]
    fn fallback_is_flagged() {
        let f = fallback_onset();
        assert_eq!(f.years, DEFAULT_ONSET_YEARS);
        assert!(f.is_fallback);
    }

    // ── boundary search ──

    #[test]
    fn forward_uses_next_boundary() {
        let cal = calendar();
        let birth = at(2024, 1, 10, 4, 49);
        let d = boundary_distance_days(&birth, LuckDirection::Forward, &cal).unwrap();
        // next jie is 立春; 大寒 is a mid-month term and is skipped
        let expected = birth.days_until(&at(2024, 2, 4, 16, 27));
        assert!((d - expected).abs() < 1e-6);
    }

    #[test]
    fn reverse_uses_previous_boundary() {
        let cal = calendar();
        let birth = at(2024, 1, 10, 4, 49);
        let d = boundary_distance_days(&birth, LuckDirection::Reverse, &cal).unwrap();
        assert!((d - 4.0).abs() < 1e-6);
        assert_eq!(onset_age(&birth, LuckDirection::Reverse, &cal).years, 1);
    }

    #[test]
    fn reverse_crosses_into_previous_year() {
        let cal = calendar();
        let birth = at(2024, 1, 2, 17, 33);
        let d = boundary_distance_days(&birth, LuckDirection::Reverse, &cal).unwrap();
        assert!((d - 26.0).abs() < 1e-6);
    }

    #[test]
    fn forward_missing_next_year_falls_back() {
        let cal = calendar();
        let birth = at(2024, 12, 20, 0, 0);
        assert!(boundary_distance_days(&birth, LuckDirection::Forward, &cal).is_err());
        let o = onset_age(&birth, LuckDirection::Forward, &cal);
        assert!(o.is_fallback);
        assert_eq!(o.years, DEFAULT_ONSET_YEARS);
    }
}
