//! Percentile curves (percentile → duration).
//!
//! An elapsed-time report plots, per partition, the duration below which
//! each percentage of jobs finished.

use serde::{Deserialize, Serialize};

use super::duration::format_duration;
use super::percentile::Percentile;
use crate::error::{StatsError, StatsResult};

/// One point on a percentile curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Percentile in whole percent (0..=100).
    pub percentile: u32,
    /// Truncated quantile in minutes.
    pub minutes: i64,
    /// `D-HH:MM` rendering of `minutes`.
    pub label: String,
}

/// Computes the curve at `0, step, 2*step, ..` up to 100.
///
/// The 100th percentile is always included even when `step` does not
/// divide 100.
///
/// # Errors
/// - `EmptyInput` if `durations` is empty.
/// - `InvalidInput` if `step` is 0 or greater than 100.
pub fn percentile_curve(durations: &[i64], step: u32) -> StatsResult<Vec<CurvePoint>> {
    if step == 0 || step > 100 {
        return Err(StatsError::invalid_input(format!(
            "curve step must be within 1..=100, got {step}"
        )));
    }
    if durations.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut sorted = durations.to_vec();
    sorted.sort_unstable();

    let mut percents: Vec<u32> = (0..=100).step_by(step as usize).collect();
    if percents.last() != Some(&100) {
        percents.push(100);
    }

    percents
        .into_iter()
        .map(|percentile| {
            let minutes = Percentile::new(f64::from(percentile) / 100.0)?.apply_sorted(&sorted)?;
            Ok(CurvePoint {
                percentile,
                minutes,
                label: format_duration(minutes)?,
            })
        })
        .collect()
}
