//! Duration summaries (mean, percentile, max).
//!
//! Computes the per-group figures a wait-time report shows for each
//! partition, from integer minute samples.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Mean | Arithmetic mean of the samples (float) |
//! | Percentile | Truncated linear-interpolated quantile |
//! | Max | Largest sample |

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::duration::{format_duration, format_minutes_f64};
use super::percentile::Percentile;
use crate::error::{StatsError, StatsResult};

/// Summary statistics over a set of durations.
///
/// All time values are in minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of samples summarized.
    pub count: usize,
    /// Mean duration.
    pub mean: f64,
    /// Quantile level the percentile was computed at (e.g. 0.95).
    pub level: f64,
    /// Truncated quantile at `level`.
    pub percentile: i64,
    /// Largest duration.
    pub max: i64,
}

/// `D-HH:MM` renderings of a [`Summary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLabels {
    /// Mean, truncated to whole minutes.
    pub mean: String,
    /// Percentile value.
    pub percentile: String,
    /// Largest duration.
    pub max: String,
}

impl Summary {
    /// Formats mean, percentile and max for display.
    ///
    /// The mean is truncated to whole minutes first.
    pub fn labels(&self) -> StatsResult<SummaryLabels> {
        Ok(SummaryLabels {
            mean: format_minutes_f64(self.mean)?,
            percentile: format_duration(self.percentile)?,
            max: format_duration(self.max)?,
        })
    }
}

/// Summarizes durations at quantile level `p`.
///
/// # Errors
/// - `EmptyInput` if `durations` is empty.
/// - `InvalidPercentile` if `p` is outside `[0, 1]`.
pub fn summarize(durations: &[i64], p: f64) -> StatsResult<Summary> {
    summarize_with(durations, Percentile::new(p)?)
}

/// Summarizes durations with a preconfigured aggregator.
pub fn summarize_with(durations: &[i64], aggregator: Percentile) -> StatsResult<Summary> {
    if durations.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut sorted = durations.to_vec();
    sorted.sort_unstable();

    let count = sorted.len();
    let total: f64 = sorted.iter().map(|&d| d as f64).sum();
    let max = sorted[count - 1];

    Ok(Summary {
        count,
        mean: total / count as f64,
        level: aggregator.level(),
        percentile: aggregator.apply_sorted(&sorted)?,
        max,
    })
}

/// Groups `(key, minutes)` samples and summarizes each group.
///
/// Keys come back in ascending order. Every group is non-empty by
/// construction; an empty input fails with `EmptyInput`.
pub fn summarize_by<K, I>(samples: I, p: f64) -> StatsResult<BTreeMap<K, Summary>>
where
    K: Ord + std::fmt::Debug,
    I: IntoIterator<Item = (K, i64)>,
{
    let aggregator = Percentile::new(p)?;

    let mut groups: BTreeMap<K, Vec<i64>> = BTreeMap::new();
    for (key, minutes) in samples {
        groups.entry(key).or_default().push(minutes);
    }
    if groups.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut summaries = BTreeMap::new();
    for (key, durations) in groups {
        let summary = summarize_with(&durations, aggregator)?;
        debug!(
            "summary {:?}: n={} mean={:.1} {}={} max={}",
            key,
            summary.count,
            summary.mean,
            aggregator.name(),
            summary.percentile,
            summary.max
        );
        summaries.insert(key, summary);
    }
    Ok(summaries)
}

/// Largest `max` across summaries, or `None` when there are none.
pub fn overall_max<'a, I>(summaries: I) -> Option<i64>
where
    I: IntoIterator<Item = &'a Summary>,
{
    summaries.into_iter().map(|s| s.max).max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_basic() {
        let s = summarize(&[10, 20, 30], 0.95).unwrap();
        assert_eq!(s.max, 30);
        assert!((s.mean - 20.0).abs() < 1e-10);
        assert_eq!(s.count, 3);
        assert!((s.level - 0.95).abs() < 1e-10);
        // rank 1.9 -> 30 - 10 * 0.1
        assert_eq!(s.percentile, 29);
    }

    #[test]
    fn test_summarize_empty() {
        assert!(matches!(summarize(&[], 0.95), Err(StatsError::EmptyInput)));
    }

    #[test]
    fn test_summarize_median() {
        let s = summarize(&[4, 1, 3, 2], 0.5).unwrap();
        assert_eq!(s.percentile, 2);
        assert_eq!(s.max, 4);
        assert!((s.mean - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_summarize_invalid_level() {
        assert!(matches!(
            summarize(&[1], 2.0),
            Err(StatsError::InvalidPercentile(_))
        ));
    }

    #[test]
    fn test_labels() {
        let s = summarize(&[60, 120, 1500], 1.0).unwrap();
        let labels = s.labels().unwrap();
        assert_eq!(labels.mean, "0-09:20"); // 560 minutes
        assert_eq!(labels.percentile, "1-01:00");
        assert_eq!(labels.max, "1-01:00");
    }

    #[test]
    fn test_summarize_by_groups_sorted() {
        let samples = vec![
            ("gpu", 30),
            ("cpu", 10),
            ("gpu", 10),
            ("cpu", 20),
            ("bigmem", 5),
        ];
        let summaries = summarize_by(samples, 0.5).unwrap();

        let keys: Vec<_> = summaries.keys().copied().collect();
        assert_eq!(keys, vec!["bigmem", "cpu", "gpu"]);
        assert_eq!(summaries["cpu"].max, 20);
        assert_eq!(summaries["cpu"].percentile, 15);
        assert!((summaries["gpu"].mean - 20.0).abs() < 1e-10);
        assert_eq!(summaries["bigmem"].count, 1);
        assert_eq!(overall_max(summaries.values()), Some(30));
    }

    #[test]
    fn test_summarize_by_empty() {
        let samples: Vec<(String, i64)> = Vec::new();
        assert!(matches!(
            summarize_by(samples, 0.95),
            Err(StatsError::EmptyInput)
        ));
        assert_eq!(overall_max(std::iter::empty()), None);
    }
}
