//! Julian Day ↔ proleptic Gregorian calendar conversions.
//!
//! Meeus, *Astronomical Algorithms*, ch. 7. The Gregorian correction is
//! always applied, so dates before 1582-10-15 are treated as proleptic
//! Gregorian rather than Julian calendar dates.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Minutes in one day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Convert a calendar date with fractional day to a Julian Date.
///
/// `day_frac` is the day of month plus the elapsed fraction of that day,
/// e.g. `1.5` for noon on the 1st.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let y = year as f64;
    let m = month as f64;

    let (y2, m2) = if m <= 2.0 { (y - 1.0, m + 12.0) } else { (y, m) };
    let a = (y2 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y2 + 4716.0)).floor() + (30.6001 * (m2 + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a Julian Date back to `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_frac)
}

/// Integer Julian Day Number of the civil day containing `jd`.
pub fn julian_day_number(jd: f64) -> i64 {
    (jd + 0.5).floor() as i64
}
