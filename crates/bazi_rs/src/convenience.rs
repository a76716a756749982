//! One-call readings from birth strings with the default calendar.

use bazi_base::{
    BaziChart, CalendarService, CareerRecommendation, ElementProfile, FortuneConfig, FortuneCurve,
    Gender, LuckPillars, SolarTermTable, career_recommendation, element_profile, fortune_curve,
    luck_pillars,
};
use bazi_calendar::AstronomicalCalendar;
use bazi_time::CivilDateTime;
use tracing::warn;

use crate::error::BaziError;

/// Everything derived from one birth moment and gender.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub chart: BaziChart,
    pub gender: Gender,
    pub profile: ElementProfile,
    pub luck: LuckPillars,
    /// Absent when the calendar could not supply an annual pillar for
    /// some year of the curve.
    pub curve: Option<FortuneCurve>,
    pub career: CareerRecommendation,
}

/// Full reading from `YYYY-MM-DD` / `HH:mm` strings with the default calendar.
///
/// `None` when the input is malformed or outside the calendar range.
pub fn reading(date: &str, time: &str, gender: Gender) -> Option<Reading> {
    try_reading(date, time, gender).ok()
}

/// Like [`reading`], reporting why a chart could not be produced.
pub fn try_reading(date: &str, time: &str, gender: Gender) -> Result<Reading, BaziError> {
    let birth = CivilDateTime::parse(date, time)?;
    reading_with(
        &birth,
        gender,
        &AstronomicalCalendar::default(),
        &FortuneConfig::default(),
    )
}

/// Like [`try_reading`], with the gender as text (`male`/`m`/`男`,
/// `female`/`f`/`女`).
pub fn reading_from_strs(date: &str, time: &str, gender: &str) -> Result<Reading, BaziError> {
    let gender: Gender = gender.parse()?;
    try_reading(date, time, gender)
}

/// Full reading with an explicit calendar and fortune weights.
pub fn reading_with<C>(
    birth: &CivilDateTime,
    gender: Gender,
    calendar: &C,
    config: &FortuneConfig,
) -> Result<Reading, BaziError>
where
    C: CalendarService + ?Sized,
{
    let chart = BaziChart::compute(birth, calendar)?;
    let profile = element_profile(&chart);
    let luck = luck_pillars(&chart, gender, calendar);
    let curve = match fortune_curve(&chart, &profile, &luck, calendar, config) {
        Ok(curve) => Some(curve),
        Err(e) => {
            warn!(birth = %birth, error = %e, "fortune curve unavailable");
            None
        }
    };
    let career = career_recommendation(&profile);
    Ok(Reading {
        chart,
        gender,
        profile,
        luck,
        curve,
        career,
    })
}

/// Four pillars only, with the default calendar.
pub fn chart(date: &str, time: &str) -> Result<BaziChart, BaziError> {
    let birth = CivilDateTime::parse(date, time)?;
    Ok(BaziChart::compute(&birth, &AstronomicalCalendar::default())?)
}

/// The 24 solar terms of `year` with the default calendar.
pub fn solar_terms(year: i32) -> Result<SolarTermTable, BaziError> {
    Ok(AstronomicalCalendar::default().solar_terms(year)?)
}
