//! Duration statistics.
//!
//! Pure computations over integer minute durations: `D-HH:MM` formatting,
//! truncated percentile aggregation, grouped summaries, axis ticks and
//! percentile curves.
//!
//! # Percentile
//!
//! Quantiles interpolate linearly between ranks and are truncated (not
//! rounded) to whole minutes, so `percentile_fn(0.5)` over `[1, 2, 3, 4]`
//! yields `2`.
//!
//! # Reference
//! Hyndman & Fan (1996), "Sample Quantiles in Statistical Packages"

mod curve;
mod duration;
mod percentile;
mod summary;
mod ticks;

pub use curve::{percentile_curve, CurvePoint};
pub use duration::{format_duration, format_minutes_f64, Dhhmm, MINUTES_PER_DAY, MINUTES_PER_HOUR};
pub use percentile::{percentile_fn, quantile_sorted, Percentile};
pub use summary::{overall_max, summarize, summarize_by, summarize_with, Summary, SummaryLabels};
pub use ticks::{build_ticks, Axis, Tick};
