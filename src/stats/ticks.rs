//! Axis ticks labelled in `D-HH:MM`.
//!
//! Ticks are evenly spaced over `[0, max]` and truncated to whole minutes,
//! so a presenter can place them on a minutes axis and show the label text.

use serde::{Deserialize, Serialize};

use super::duration::format_duration;
use crate::error::{StatsError, StatsResult};

/// An axis reference point and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
    /// Position in minutes.
    pub value: i64,
    /// `D-HH:MM` rendering of `value`.
    pub label: String,
}

/// A minutes axis: its visible range and tick set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    /// Lower bound (always 0).
    pub lower: f64,
    /// Upper bound (largest duration scaled by headroom).
    pub upper: f64,
    /// Ticks spanning `[lower, upper]`.
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Builds an axis for durations up to `max_minutes`, extended by
    /// `headroom` (e.g. 1.1 leaves 10% space past the longest bar).
    pub fn for_max(max_minutes: i64, headroom: f64, count: usize) -> StatsResult<Self> {
        if max_minutes < 0 {
            return Err(StatsError::invalid_input(format!(
                "axis maximum must be non-negative, got {max_minutes}"
            )));
        }
        if !headroom.is_finite() || headroom <= 0.0 {
            return Err(StatsError::invalid_input(format!(
                "headroom must be a positive finite factor, got {headroom}"
            )));
        }
        let upper = max_minutes as f64 * headroom;
        Ok(Self {
            lower: 0.0,
            upper,
            ticks: build_ticks(upper, count)?,
        })
    }

    /// Tick positions only.
    pub fn values(&self) -> Vec<i64> {
        self.ticks.iter().map(|t| t.value).collect()
    }

    /// Tick labels only.
    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }
}

/// Produces `count` evenly spaced ticks from 0 to `max_value` inclusive.
///
/// Each position is truncated toward zero before labelling. With a small
/// `max_value` and many ticks, neighbouring positions may truncate to the
/// same minute.
///
/// - `count == 0` returns no ticks.
/// - `count == 1` returns the single tick `0`.
///
/// # Errors
/// `InvalidInput` if `max_value` is negative or not finite.
pub fn build_ticks(max_value: f64, count: usize) -> StatsResult<Vec<Tick>> {
    if !max_value.is_finite() || max_value < 0.0 {
        return Err(StatsError::invalid_input(format!(
            "tick maximum must be a non-negative finite number, got {max_value}"
        )));
    }

    let step = if count > 1 {
        max_value / (count - 1) as f64
    } else {
        0.0
    };

    (0..count)
        .map(|i| {
            let position = if count > 1 && i == count - 1 {
                max_value
            } else {
                i as f64 * step
            };
            let value = position.trunc() as i64;
            Ok(Tick {
                value,
                label: format_duration(value)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_ticks_even() {
        let ticks = build_ticks(100.0, 5).unwrap();
        let values: Vec<i64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0, 25, 50, 75, 100]);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ticks[0].label, "0-00:00");
        assert_eq!(ticks[4].label, "0-01:40");
    }

    #[test]
    fn test_build_ticks_truncates() {
        // step = 10 / 3 = 3.33..
        let values: Vec<i64> = build_ticks(10.0, 4).unwrap().iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0, 3, 6, 10]);
    }

    #[test]
    fn test_build_ticks_degenerate_counts() {
        assert!(build_ticks(100.0, 0).unwrap().is_empty());
        let single = build_ticks(100.0, 1).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].value, 0);
    }

    #[test]
    fn test_build_ticks_invalid_max() {
        assert!(build_ticks(-1.0, 5).is_err());
        assert!(build_ticks(f64::INFINITY, 5).is_err());
        assert!(build_ticks(f64::NAN, 5).is_err());
    }

    #[test]
    fn test_axis_headroom() {
        let axis = Axis::for_max(1000, 1.1, 15).unwrap();
        assert!((axis.upper - 1100.0).abs() < 1e-9);
        assert_eq!(axis.ticks.len(), 15);
        assert_eq!(axis.values()[0], 0);
        assert!(*axis.values().last().unwrap() >= 1099);
        assert_eq!(axis.labels()[0], "0-00:00");
    }

    #[test]
    fn test_axis_rejects_bad_headroom() {
        assert!(Axis::for_max(10, 0.0, 5).is_err());
        assert!(Axis::for_max(-10, 1.1, 5).is_err());
    }
}
