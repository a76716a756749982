//! Pillar Calculator: assembles the four pillars of a birth chart.
//!
//! Year, month and day pillars come from the injected
//! [`CalendarService`]; the hour pillar is computed here from the day stem
//! with the five-rat rule (五鼠遁).

use bazi_time::CivilDateTime;
use tracing::debug;

use crate::branch::Branch;
use crate::calendar::CalendarService;
use crate::error::{CalendarError, ParseError};
use crate::pillar::Pillar;
use crate::stem::Stem;

/// Gender of the chart subject. Only affects luck-pillar direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Gender {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            _ => Err(ParseError::Gender(s.to_string())),
        }
    }
}

/// Stem of the 子 hour (slot 0), indexed by day stem.
///
/// Day stems five apart share a starting stem: 甲己 → 甲, 乙庚 → 丙,
/// 丙辛 → 戊, 丁壬 → 庚, 戊癸 → 壬.
pub const HOUR_START_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Bing,
    Stem::Wu,
    Stem::Geng,
    Stem::Ren,
    Stem::Jia,
    Stem::Bing,
    Stem::Wu,
    Stem::Geng,
    Stem::Ren,
];

/// Two-hour branch slot of a clock hour: 23:00-00:59 is slot 0 (子),
/// 01:00-02:59 slot 1 (丑), ..., 21:00-22:59 slot 11 (亥).
pub const fn hour_slot(hour: u32) -> u8 {
    (((hour + 1) / 2) % 12) as u8
}

/// Hour pillar for a day stem and clock hour (0-23).
pub const fn hour_pillar(day_stem: Stem, hour: u32) -> Pillar {
    let slot = hour_slot(hour);
    let stem = HOUR_START_STEMS[day_stem.index() as usize].offset(slot as i32);
    Pillar::from_stem_branch(stem, Branch::from_index(slot))
}

/// The four pillars of a birth moment. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaziChart {
    year: Pillar,
    month: Pillar,
    day: Pillar,
    hour: Pillar,
    birth: CivilDateTime,
}

impl BaziChart {
    /// Compute the chart of a local civil birth moment.
    ///
    /// The day pillar follows the civil date; a birth at 23:xx keeps the
    /// calendar day's pillar while its hour falls in the next day's 子 slot.
    pub fn compute<C>(birth: &CivilDateTime, calendar: &C) -> Result<Self, CalendarError>
    where
        C: CalendarService + ?Sized,
    {
        let date = calendar.sexagenary_date(birth)?;
        let hour = hour_pillar(date.day.stem(), birth.hour);
        let chart = Self {
            year: date.year,
            month: date.month,
            day: date.day,
            hour,
            birth: *birth,
        };
        debug!(birth = %birth, pillars = %chart, "bazi chart computed");
        Ok(chart)
    }

    pub const fn year(&self) -> Pillar {
        self.year
    }

    pub const fn month(&self) -> Pillar {
        self.month
    }

    pub const fn day(&self) -> Pillar {
        self.day
    }

    pub const fn hour(&self) -> Pillar {
        self.hour
    }

    /// Birth moment the chart was computed for.
    pub const fn birth(&self) -> CivilDateTime {
        self.birth
    }

    /// Day master (日主): the day pillar's stem.
    pub const fn day_master(&self) -> Stem {
        self.day.stem()
    }

    /// Pillars in year, month, day, hour order.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

impl std::fmt::Display for BaziChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Parse `YYYY-MM-DD` and `HH:mm` and compute the chart.
///
/// Returns `None` for empty or malformed input, or when the calendar cannot
/// resolve the date.
pub fn calculate_chart<C>(date: &str, time: &str, calendar: &C) -> Option<BaziChart>
where
    C: CalendarService + ?Sized,
{
    let birth = match CivilDateTime::parse(date, time) {
        Ok(b) => b,
        Err(e) => {
            debug!(date, time, error = %e, "birth input rejected");
            return None;
        }
    };
    match BaziChart::compute(&birth, calendar) {
        Ok(chart) => Some(chart),
        Err(e) => {
            debug!(birth = %birth, error = %e, "calendar could not resolve birth date");
            None
        }
    }
}
