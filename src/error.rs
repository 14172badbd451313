//! Error type shared by all statistics and report operations.

use thiserror::Error;

/// Result alias for fallible statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors raised while summarizing durations or building report data.
#[derive(Debug, Error)]
pub enum StatsError {
    /// A value the operation cannot represent (negative minutes, NaN bound).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Aggregation over an empty sample set.
    #[error("empty input: at least one duration is required")]
    EmptyInput,

    /// Quantile level outside `[0, 1]`.
    #[error("percentile must be within [0, 1], got {0}")]
    InvalidPercentile(f64),

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration text could not be parsed.
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StatsError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        StatsError::InvalidInput(message.into())
    }
}
