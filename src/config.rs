//! Report configuration.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

/// Tunables shared by the duration reports.
///
/// Every field has a default, so a partial JSON document is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Quantile level for summaries.
    #[serde(default = "default_percentile")]
    pub percentile: f64,

    /// Number of axis ticks.
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,

    /// Axis upper bound as a multiple of the longest duration.
    #[serde(default = "default_headroom")]
    pub headroom: f64,

    /// Percentile step for elapsed curves (1..=100).
    #[serde(default = "default_curve_step")]
    pub curve_step: u32,
}

fn default_percentile() -> f64 {
    0.95
}

fn default_tick_count() -> usize {
    15
}

fn default_headroom() -> f64 {
    1.1
}

fn default_curve_step() -> u32 {
    1
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            percentile: default_percentile(),
            tick_count: default_tick_count(),
            headroom: default_headroom(),
            curve_step: default_curve_step(),
        }
    }
}

impl ReportConfig {
    /// Parses and validates a JSON document.
    pub fn from_json(text: &str) -> StatsResult<Self> {
        let config: ReportConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the quantile level.
    pub fn with_percentile(mut self, p: f64) -> Self {
        self.percentile = p;
        self
    }

    /// Sets the tick count.
    pub fn with_tick_count(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    /// Sets the curve step.
    pub fn with_curve_step(mut self, step: u32) -> Self {
        self.curve_step = step;
        self
    }

    /// Checks every field is within range.
    ///
    /// # Errors
    /// `InvalidPercentile` for a level outside `[0, 1]`, `InvalidConfig`
    /// for any other out-of-range field.
    pub fn validate(&self) -> StatsResult<()> {
        if !(0.0..=1.0).contains(&self.percentile) {
            return Err(StatsError::InvalidPercentile(self.percentile));
        }
        if self.tick_count < 2 {
            return Err(StatsError::InvalidConfig(format!(
                "tick_count must be >= 2, got {}",
                self.tick_count
            )));
        }
        if !self.headroom.is_finite() || self.headroom < 1.0 {
            return Err(StatsError::InvalidConfig(format!(
                "headroom must be >= 1.0, got {}",
                self.headroom
            )));
        }
        if self.curve_step == 0 || self.curve_step > 100 {
            return Err(StatsError::InvalidConfig(format!(
                "curve_step must be within 1..=100, got {}",
                self.curve_step
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert!((config.percentile - 0.95).abs() < 1e-10);
        assert_eq!(config.tick_count, 15);
        assert!((config.headroom - 1.1).abs() < 1e-10);
        assert_eq!(config.curve_step, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = ReportConfig::from_json(r#"{"percentile": 0.9, "tick_count": 10}"#).unwrap();
        assert!((config.percentile - 0.9).abs() < 1e-10);
        assert_eq!(config.tick_count, 10);
        assert_eq!(config.curve_step, 1);
    }

    #[test]
    fn test_json_round_trip() {
        let config = ReportConfig::default().with_curve_step(5);
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(ReportConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            ReportConfig::from_json(r#"{"percentile": 95}"#),
            Err(StatsError::InvalidPercentile(_))
        ));
        assert!(matches!(
            ReportConfig::from_json(r#"{"headroom": 0.5}"#),
            Err(StatsError::InvalidConfig(_))
        ));
        assert!(ReportConfig::default().with_tick_count(1).validate().is_err());
        assert!(ReportConfig::default().with_curve_step(0).validate().is_err());
        assert!(matches!(
            ReportConfig::from_json("not json"),
            Err(StatsError::Json(_))
        ));
    }
}
