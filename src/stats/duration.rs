//! `D-HH:MM` formatting of minute counts.
//!
//! Scheduler reports show wait and run times as days, hours and minutes,
//! e.g. `1-01:00` for 1500 minutes. Days are unpadded; hours and minutes
//! are always two digits.

use std::fmt;

use crate::error::{StatsError, StatsResult};

/// Minutes per day.
pub const MINUTES_PER_DAY: i64 = 1440;
/// Minutes per hour.
pub const MINUTES_PER_HOUR: i64 = 60;

/// A non-negative minute count split into days, hours and minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dhhmm {
    /// Whole days.
    pub days: i64,
    /// Hours within the day (0..24).
    pub hours: i64,
    /// Minutes within the hour (0..60).
    pub minutes: i64,
}

impl Dhhmm {
    /// Splits a minute count. Fails on negative input.
    pub fn from_minutes(total: i64) -> StatsResult<Self> {
        if total < 0 {
            return Err(StatsError::invalid_input(format!(
                "duration must be non-negative, got {total} minutes"
            )));
        }
        let days = total / MINUTES_PER_DAY;
        let rest = total % MINUTES_PER_DAY;
        Ok(Self {
            days,
            hours: rest / MINUTES_PER_HOUR,
            minutes: rest % MINUTES_PER_HOUR,
        })
    }

    /// Total minutes represented.
    pub fn total_minutes(&self) -> i64 {
        self.days * MINUTES_PER_DAY + self.hours * MINUTES_PER_HOUR + self.minutes
    }
}

impl fmt::Display for Dhhmm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}:{:02}", self.days, self.hours, self.minutes)
    }
}

/// Formats a minute count as `D-HH:MM`.
///
/// # Errors
/// `InvalidInput` if `minutes` is negative.
///
/// # Example
/// ```
/// use u_report::stats::format_duration;
/// assert_eq!(format_duration(1500).unwrap(), "1-01:00");
/// ```
pub fn format_duration(minutes: i64) -> StatsResult<String> {
    Dhhmm::from_minutes(minutes).map(|d| d.to_string())
}

/// Formats a fractional minute count, truncating toward zero first.
///
/// Used for means, which are the only non-integer values a report labels.
pub fn format_minutes_f64(minutes: f64) -> StatsResult<String> {
    if !minutes.is_finite() || minutes < 0.0 {
        return Err(StatsError::invalid_input(format!(
            "duration must be a non-negative finite number, got {minutes}"
        )));
    }
    format_duration(minutes.trunc() as i64)
}
