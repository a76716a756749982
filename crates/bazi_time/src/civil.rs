//! Timezone-naive local date-time at minute resolution.
//!
//! `CivilDateTime` is the canonical birth-moment representation used by the
//! chart engine. Parsing goes through `chrono` so that impossible dates
//! (`2023-02-29`, `24:00`) are rejected before any calendar math runs.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::TimeError;
use crate::julian::{MINUTES_PER_DAY, calendar_to_jd, jd_to_calendar, julian_day_number};

/// Local civil date and time, no timezone, no DST.
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl CivilDateTime {
    /// Build a validated date-time.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| TimeError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::InvalidTime(format!("{hour:02}:{minute:02}")))?;
        Ok(Self::from_naive(date.and_time(time)))
    }

    /// Parse the chart input pair: date as `YYYY-MM-DD`, time as `HH:mm` (24-hour).
    pub fn parse(date: &str, time: &str) -> Result<Self, TimeError> {
        let date = date.trim();
        let time = time.trim();
        if date.is_empty() {
            return Err(TimeError::Empty("date"));
        }
        if time.is_empty() {
            return Err(TimeError::Empty("time"));
        }
        let d = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| TimeError::InvalidDate(format!("{date}: {e}")))?;
        let t = NaiveTime::parse_from_str(time, "%H:%M")
            .map_err(|e| TimeError::InvalidTime(format!("{time}: {e}")))?;
        Ok(Self::from_naive(d.and_time(t)))
    }

    /// Midnight on January 1st of `year`.
    pub fn start_of_year(year: i32) -> Result<Self, TimeError> {
        Self::new(year, 1, 1, 0, 0)
    }

    /// Julian Date of this wall-clock moment, with no offset applied.
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64 + self.hour as f64 / 24.0 + self.minute as f64 / MINUTES_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Nearest whole-minute date-time for a Julian Date.
    pub fn from_jd(jd: f64) -> Result<Self, TimeError> {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let minutes = (day_frac.fract() * MINUTES_PER_DAY).round() as i64;
        let midnight = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(|| TimeError::OutOfRange(format!("JD {jd}")))?;
        let naive = midnight
            .checked_add_signed(Duration::minutes(minutes))
            .ok_or_else(|| TimeError::OutOfRange(format!("JD {jd}")))?;
        Ok(Self::from_naive(naive))
    }

    /// Signed distance in days from `self` to `other` (positive if `other` is later).
    pub fn days_until(&self, other: &CivilDateTime) -> f64 {
        other.to_jd() - self.to_jd()
    }

    /// Julian Day Number of the civil day (midnight-to-midnight).
    pub fn day_number(&self) -> i64 {
        julian_day_number(self.to_jd())
    }

    /// Convert to a `chrono` value.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_opt(self.hour, self.minute, 0))
    }

    fn from_naive(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
        }
    }
}

impl From<NaiveDateTime> for CivilDateTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self::from_naive(dt)
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// Parses `YYYY-MM-DD HH:mm` (a `T` separator is accepted too).
impl FromStr for CivilDateTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TimeError::Empty("date-time"));
        }
        let (date, time) = s
            .split_once([' ', 'T'])
            .ok_or_else(|| TimeError::InvalidTime(format!("{s}: missing time part")))?;
        Self::parse(date, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let t = CivilDateTime::parse("2000-04-16", "17:25").unwrap();
        assert_eq!((t.year, t.month, t.day, t.hour, t.minute), (2000, 4, 16, 17, 25));
    }

    #[test]
    fn parse_empty_is_error() {
        assert_eq!(CivilDateTime::parse("", "10:00"), Err(TimeError::Empty("date")));
        assert_eq!(CivilDateTime::parse("2000-01-01", "  "), Err(TimeError::Empty("time")));
    }

    #[test]
    fn parse_rejects_impossible_dates() {
        assert!(matches!(
            CivilDateTime::parse("2023-02-29", "10:00"),
            Err(TimeError::InvalidDate(_))
        ));
        assert!(matches!(
            CivilDateTime::parse("2023-13-01", "10:00"),
            Err(TimeError::InvalidDate(_))
        ));
        assert!(matches!(
            CivilDateTime::parse("2023-01-01", "24:00"),
            Err(TimeError::InvalidTime(_))
        ));
        assert!(matches!(
            CivilDateTime::parse("2023/01/01", "10:00"),
            Err(TimeError::InvalidDate(_))
        ));
    }

    #[test]
    fn from_str_with_space_or_t() {
        let a: CivilDateTime = "1990-05-20 08:15".parse().unwrap();
        let b: CivilDateTime = "1990-05-20T08:15".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "1990-05-20 08:15");
    }

    #[test]
    fn ordering_is_chronological() {
        let a = CivilDateTime::new(2020, 12, 31, 23, 59).unwrap();
        let b = CivilDateTime::new(2021, 1, 1, 0, 0).unwrap();
        assert!(a < b);
    }

    #[test]
    fn jd_roundtrip_minute_precision() {
        let t = CivilDateTime::new(1985, 7, 14, 6, 41).unwrap();
        let back = CivilDateTime::from_jd(t.to_jd()).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn from_jd_rounds_up_across_midnight() {
        // 10 seconds before midnight rounds to the next day's 00:00.
        let jd = CivilDateTime::new(2024, 2, 29, 0, 0).unwrap().to_jd() - 10.0 / 86_400.0;
        let t = CivilDateTime::from_jd(jd).unwrap();
        assert_eq!(t, CivilDateTime::new(2024, 2, 29, 0, 0).unwrap());
    }

    #[test]
    fn days_until_is_signed() {
        let a = CivilDateTime::new(2024, 1, 1, 0, 0).unwrap();
        let b = CivilDateTime::new(2024, 1, 2, 12, 0).unwrap();
        assert!((a.days_until(&b) - 1.5).abs() < 1e-9);
        assert!((b.days_until(&a) + 1.5).abs() < 1e-9);
    }

    #[test]
    fn day_number_ignores_time_of_day() {
        let early = CivilDateTime::new(2000, 1, 1, 0, 0).unwrap();
        let late = CivilDateTime::new(2000, 1, 1, 23, 59).unwrap();
        assert_eq!(early.day_number(), 2_451_545);
        assert_eq!(late.day_number(), 2_451_545);
    }
}
