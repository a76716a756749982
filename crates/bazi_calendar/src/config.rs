//! Configuration for the astronomical calendar.

/// Supported Gregorian year range, inclusive.
pub const MIN_YEAR: i32 = 1600;
pub const MAX_YEAR: i32 = 2400;

/// Configuration for [`AstronomicalCalendar`](crate::AstronomicalCalendar).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarConfig {
    /// Offset of the local civil clock from UT, hours. Default 8.0 (China
    /// Standard Time).
    pub utc_offset_hours: f64,
    /// Coarse scan step when bracketing a solar-term crossing, days.
    pub step_size_days: f64,
    /// Maximum bisection iterations.
    pub max_iterations: u32,
    /// Convergence threshold in days (1e-5 days ≈ 0.86 s).
    pub convergence_days: f64,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: 8.0,
            step_size_days: 1.0,
            max_iterations: 50,
            convergence_days: 1e-5,
        }
    }
}

impl CalendarConfig {
    /// Config for a fixed UT offset, other fields default.
    pub fn with_utc_offset(hours: f64) -> Self {
        Self {
            utc_offset_hours: hours,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.utc_offset_hours.is_finite() || self.utc_offset_hours.abs() > 14.0 {
            return Err("utc_offset_hours must be within [-14, 14]");
        }
        if self.step_size_days.is_nan() || self.step_size_days <= 0.0 || self.step_size_days > 5.0 {
            return Err("step_size_days must be in (0, 5]");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if self.convergence_days.is_nan() || self.convergence_days <= 0.0 {
            return Err("convergence_days must be > 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(CalendarConfig::default().validate().is_ok());
        assert_eq!(CalendarConfig::default().utc_offset_hours, 8.0);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(CalendarConfig::with_utc_offset(15.0).validate().is_err());
        assert!(CalendarConfig::with_utc_offset(f64::NAN).validate().is_err());
        let zero_step = CalendarConfig {
            step_size_days: 0.0,
            ..CalendarConfig::default()
        };
        assert!(zero_step.validate().is_err());
        let no_iter = CalendarConfig {
            max_iterations: 0,
            ..CalendarConfig::default()
        };
        assert!(no_iter.validate().is_err());
    }
}
