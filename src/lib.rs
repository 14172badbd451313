//! Duration statistics for compute-cluster scheduler reports.
//!
//! Summarizes job wait and run times into the figures a report chart
//! needs. Rows come from an external row source; results go to an
//! external presenter. Nothing here touches a database or a renderer.
//!
//! # Modules
//!
//! - **`stats`**: `format_duration` (`D-HH:MM`), `percentile_fn`,
//!   `summarize`, `build_ticks`, percentile curves
//! - **`models`**: `JobRecord`, `JobState`, `Outcome`
//! - **`validation`**: Row integrity checks and sample extraction
//! - **`outcome`**: Success/failure counts and report date window
//! - **`report`**: Wait, elapsed and outcome report assembly
//! - **`config`**: `ReportConfig` (percentile level, ticks, headroom)
//!
//! # Example
//!
//! ```
//! use u_report::stats::{build_ticks, format_duration, summarize};
//!
//! let summary = summarize(&[10, 20, 30], 0.95).unwrap();
//! assert_eq!(summary.max, 30);
//! assert_eq!(format_duration(1500).unwrap(), "1-01:00");
//! assert_eq!(build_ticks(100.0, 5).unwrap().len(), 5);
//! ```
//!
//! # Concurrency
//!
//! All operations are pure and synchronous; every public type is
//! `Send + Sync`.

pub mod config;
pub mod error;
pub mod models;
pub mod outcome;
pub mod report;
pub mod stats;
pub mod validation;

pub use config::ReportConfig;
pub use error::{StatsError, StatsResult};
