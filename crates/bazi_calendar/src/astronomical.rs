//! The default [`CalendarService`]: sexagenary dates from computed solar
//! terms.

use bazi_base::{
    ALL_SOLAR_TERMS, CalendarError, CalendarService, Pillar, SexagenaryDate, SolarTerm,
    SolarTermEvent, SolarTermTable, month_pillar,
};
use bazi_time::CivilDateTime;
use tracing::debug;

use crate::config::{CalendarConfig, MAX_YEAR, MIN_YEAR};
use crate::solar_term::solar_term_moment;

/// Calendar backed by the built-in apparent-solar-longitude model.
///
/// - Year pillar changes at 立春.
/// - Month pillar changes at each of the twelve month-boundary terms.
/// - Day pillar follows the civil (midnight-to-midnight) day.
#[derive(Debug, Clone, Default)]
pub struct AstronomicalCalendar {
    config: CalendarConfig,
}

impl AstronomicalCalendar {
    pub fn new(config: CalendarConfig) -> Result<Self, CalendarError> {
        config.validate().map_err(CalendarError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Local civil moment at which `term` begins in `year`.
    pub fn term_moment(&self, year: i32, term: SolarTerm) -> Result<CivilDateTime, CalendarError> {
        solar_term_moment(year, term, &self.config)
    }

    /// The month-boundary term that opened the solar month containing
    /// `moment`; falls back to the previous year's 大雪 for early January.
    pub fn month_boundary_at_or_before(
        &self,
        moment: &CivilDateTime,
    ) -> Result<SolarTermEvent, CalendarError> {
        for term in ALL_SOLAR_TERMS.iter().rev().filter(|t| t.is_month_boundary()) {
            let at = self.term_moment(moment.year, *term)?;
            if at <= *moment {
                return Ok(SolarTermEvent { term: *term, moment: at });
            }
        }
        let term = SolarTerm::MajorSnow;
        let at = self.term_moment(moment.year - 1, term)?;
        Ok(SolarTermEvent { term, moment: at })
    }

    /// Sexagenary year that is current at `moment` (changes at 立春).
    pub fn solar_year(&self, moment: &CivilDateTime) -> Result<i32, CalendarError> {
        let spring = self.term_moment(moment.year, SolarTerm::BeginningOfSpring)?;
        Ok(if *moment >= spring {
            moment.year
        } else {
            moment.year - 1
        })
    }
}

fn check_year(year: i32) -> Result<(), CalendarError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::OutOfRange { year })
    }
}

impl CalendarService for AstronomicalCalendar {
    fn sexagenary_date(&self, moment: &CivilDateTime) -> Result<SexagenaryDate, CalendarError> {
        check_year(moment.year)?;
        let year = Pillar::for_year_number(self.solar_year(moment)?);
        let boundary = self.month_boundary_at_or_before(moment)?;
        let branch = boundary
            .term
            .month_branch()
            .ok_or(CalendarError::NoBoundary("at or before"))?;
        let month = month_pillar(year.stem(), branch);
        let day = Pillar::for_day_number(moment.day_number());
        Ok(SexagenaryDate { year, month, day })
    }

    fn solar_terms(&self, year: i32) -> Result<SolarTermTable, CalendarError> {
        check_year(year)?;
        let events = ALL_SOLAR_TERMS
            .iter()
            .map(|&term| {
                self.term_moment(year, term)
                    .map(|moment| SolarTermEvent { term, moment })
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(year, count = events.len(), "solar term table computed");
        Ok(SolarTermTable::new(year, events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> CivilDateTime {
        CivilDateTime::new(y, m, d, h, min).unwrap()
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = CalendarConfig {
            max_iterations: 0,
            ..CalendarConfig::default()
        };
        assert!(matches!(
            AstronomicalCalendar::new(cfg),
            Err(CalendarError::InvalidConfig(_))
        ));
    }

    #[test]
    fn early_january_uses_previous_major_snow() {
        let cal = AstronomicalCalendar::default();
        let b = cal.month_boundary_at_or_before(&at(2024, 1, 2, 12, 0)).unwrap();
        assert_eq!(b.term, SolarTerm::MajorSnow);
        assert_eq!(b.moment.year, 2023);
        assert_eq!(b.moment.month, 12);
    }

    #[test]
    fn solar_year_changes_at_spring() {
        let cal = AstronomicalCalendar::default();
        assert_eq!(cal.solar_year(&at(2024, 2, 4, 10, 0)).unwrap(), 2023);
        assert_eq!(cal.solar_year(&at(2024, 2, 4, 20, 0)).unwrap(), 2024);
    }

    #[test]
    fn table_has_24_chronological_terms() {
        let cal = AstronomicalCalendar::default();
        let table = cal.solar_terms(2024).unwrap();
        assert_eq!(table.events.len(), 24);
        assert_eq!(table.events[0].term, SolarTerm::MinorCold);
        assert_eq!(table.events[23].term, SolarTerm::WinterSolstice);
        for pair in table.events.windows(2) {
            assert!(pair[0].moment < pair[1].moment);
        }
        assert!(table.events.iter().all(|e| e.moment.year == 2024));
    }

    #[test]
    fn range_enforced() {
        let cal = AstronomicalCalendar::default();
        assert!(cal.solar_terms(1599).is_err());
        assert!(cal.solar_terms(2401).is_err());
        assert!(cal.sexagenary_date(&at(2500, 6, 1, 0, 0)).is_err());
    }
}
