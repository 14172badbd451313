//! Quantile aggregation with linear interpolation.
//!
//! # Algorithm
//! For sorted samples `x[0..n]` and level `p`, the rank is `p * (n - 1)`.
//! The result interpolates linearly between the two neighbouring samples
//! and is truncated toward zero to whole minutes.
//!
//! Interpolation runs from the nearer neighbour: `a + (b - a) * g` below
//! the midpoint, `b - (b - a) * (1 - g)` from it on. This matches numpy's
//! `lerp`, so truncated results agree with numpy quantiles even where the
//! float result lands just under an integer.
//!
//! # Reference
//! Hyndman & Fan (1996), "Sample Quantiles in Statistical Packages", type 7

use crate::error::{StatsError, StatsResult};

/// A configured quantile aggregator.
///
/// Carries its level so the same aggregator can be applied to many groups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentile {
    level: f64,
}

impl Percentile {
    /// Creates an aggregator for level `p` in `[0, 1]`.
    pub fn new(p: f64) -> StatsResult<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(StatsError::InvalidPercentile(p));
        }
        Ok(Self { level: p })
    }

    /// The quantile level (e.g. 0.95).
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Column-style name, e.g. `percentile_95`.
    pub fn name(&self) -> String {
        format!("percentile_{:02.0}", self.level * 100.0)
    }

    /// Applies the aggregator to unsorted samples.
    pub fn apply(&self, samples: &[i64]) -> StatsResult<i64> {
        let mut sorted = samples.to_vec();
        sorted.sort_unstable();
        self.apply_sorted(&sorted)
    }

    /// Applies the aggregator to samples already sorted ascending.
    pub fn apply_sorted(&self, sorted: &[i64]) -> StatsResult<i64> {
        quantile_sorted(sorted, self.level).map(|q| q.trunc() as i64)
    }
}

/// Returns an aggregator computing the truncated `p`-th quantile.
///
/// An out-of-range `p` surfaces as `InvalidPercentile` on every call.
///
/// # Example
/// ```
/// use u_report::stats::percentile_fn;
/// let median = percentile_fn(0.5);
/// assert_eq!(median(&[1, 2, 3, 4]).unwrap(), 2);
/// ```
pub fn percentile_fn(p: f64) -> impl Fn(&[i64]) -> StatsResult<i64> {
    move |samples| Percentile::new(p)?.apply(samples)
}

/// Linear-interpolated quantile of sorted samples, before truncation.
pub fn quantile_sorted(sorted: &[i64], p: f64) -> StatsResult<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(StatsError::InvalidPercentile(p));
    }
    let n = sorted.len();
    if n == 0 {
        return Err(StatsError::EmptyInput);
    }

    let rank = (n - 1) as f64 * p;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    Ok(lerp(sorted[lo] as f64, sorted[hi] as f64, rank - lo as f64))
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;
    if t >= 0.5 {
        b - diff * (1.0 - t)
    } else {
        a + diff * t
    }
}
