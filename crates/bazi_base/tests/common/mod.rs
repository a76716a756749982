//! Fixed-date calendar for tests that should not depend on astronomy.
//!
//! Month boundaries fall at 00:00 on a fixed day of each Gregorian month
//! (close to their real dates), mid-month terms on the 21st.

#![allow(dead_code)]

use bazi_base::{
    ALL_SOLAR_TERMS, CalendarError, CalendarService, Pillar, SexagenaryDate, SolarTermEvent,
    SolarTermTable, month_pillar,
};
use bazi_time::CivilDateTime;

/// Day of month on which each month-boundary term falls, January first.
pub const BOUNDARY_DAYS: [u32; 12] = [6, 4, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7];

/// Day of month for mid-month terms.
pub const MID_MONTH_DAY: u32 = 21;

pub struct FixedDateCalendar {
    pub min_year: i32,
    pub max_year: i32,
}

impl Default for FixedDateCalendar {
    fn default() -> Self {
        Self {
            min_year: 1800,
            max_year: 2200,
        }
    }
}

impl FixedDateCalendar {
    fn check(&self, year: i32) -> Result<(), CalendarError> {
        if year < self.min_year || year > self.max_year {
            Err(CalendarError::OutOfRange { year })
        } else {
            Ok(())
        }
    }
}

impl CalendarService for FixedDateCalendar {
    fn sexagenary_date(&self, moment: &CivilDateTime) -> Result<SexagenaryDate, CalendarError> {
        self.check(moment.year)?;
        let this_year = self.solar_terms(moment.year)?;
        let spring = this_year
            .event(bazi_base::SolarTerm::BeginningOfSpring)
            .ok_or(CalendarError::NoBoundary("立春"))?;
        let solar_year = if *moment >= spring.moment {
            moment.year
        } else {
            moment.year - 1
        };
        let year = Pillar::for_year_number(solar_year);

        let boundary = match this_year.boundary_at_or_before(moment) {
            Some(e) => *e,
            None => *self
                .solar_terms(moment.year - 1)?
                .boundary_at_or_before(moment)
                .ok_or(CalendarError::NoBoundary("before"))?,
        };
        let branch = boundary
            .term
            .month_branch()
            .ok_or(CalendarError::NoBoundary("month"))?;
        let month = month_pillar(year.stem(), branch);
        let day = Pillar::for_day_number(moment.day_number());
        Ok(SexagenaryDate { year, month, day })
    }

    fn solar_terms(&self, year: i32) -> Result<SolarTermTable, CalendarError> {
        self.check(year)?;
        let mut events = Vec::with_capacity(24);
        for term in ALL_SOLAR_TERMS {
            let month = term.index() as u32 / 2 + 1;
            let day = if term.is_month_boundary() {
                BOUNDARY_DAYS[month as usize - 1]
            } else {
                MID_MONTH_DAY
            };
            events.push(SolarTermEvent {
                term,
                moment: CivilDateTime::new(year, month, day, 0, 0)?,
            });
        }
        Ok(SolarTermTable::new(year, events))
    }
}
