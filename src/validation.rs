//! Row validation and sample extraction.
//!
//! Checks job rows before they are aggregated. Detects:
//! - Missing partition
//! - Jobs that never started
//! - Start not before end
//! - Start before submission (negative wait)
//!
//! The `*_samples` functions drop offending rows instead and yield
//! `(partition, minutes)` pairs ready for `summarize_by`.

use log::warn;

use crate::models::{JobRecord, JobState, NodeEvent};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending job.
    pub job_id: u64,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The row has no partition.
    MissingPartition,
    /// `time_start` is 0.
    NeverStarted,
    /// `time_start` is not before `time_end`.
    InvertedInterval,
    /// `time_start` is before `time_submit`.
    NegativeWait,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, job_id: u64, message: impl Into<String>) -> Self {
        Self {
            kind,
            job_id,
            message: message.into(),
        }
    }
}

/// Validates job rows.
///
/// Checks:
/// 1. Every row has a partition
/// 2. Every row has started (`time_start != 0`)
/// 3. Start precedes end
/// 4. Start does not precede submission
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_records(records: &[JobRecord]) -> ValidationResult {
    let mut errors = Vec::new();

    for rec in records {
        if !rec.has_partition() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPartition,
                rec.job_id,
                format!("Job {} has no partition", rec.job_id),
            ));
        }

        if rec.time_start == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NeverStarted,
                rec.job_id,
                format!("Job {} never started", rec.job_id),
            ));
            // Interval and wait checks are meaningless without a start.
            continue;
        }

        if rec.time_start >= rec.time_end {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedInterval,
                rec.job_id,
                format!(
                    "Job {} starts at {} but ends at {}",
                    rec.job_id, rec.time_start, rec.time_end
                ),
            ));
        }

        if rec.wait_minutes() < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeWait,
                rec.job_id,
                format!(
                    "Job {} starts at {} before submission at {}",
                    rec.job_id, rec.time_start, rec.time_submit
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `(partition, wait minutes)` for every usable row.
///
/// Keeps rows with a partition, a start before the end and a
/// non-negative wait.
pub fn wait_samples(records: &[JobRecord]) -> Vec<(String, i64)> {
    let samples: Vec<_> = records
        .iter()
        .filter(|r| r.has_partition() && r.has_run())
        .map(|r| (r.partition.clone(), r.wait_minutes()))
        .filter(|(_, wait)| *wait >= 0)
        .collect();
    log_dropped("wait", records.len(), samples.len());
    samples
}

/// `(partition, elapsed minutes)` for every usable completed row.
pub fn elapsed_samples(records: &[JobRecord]) -> Vec<(String, i64)> {
    let samples: Vec<_> = records
        .iter()
        .filter(|r| r.state == JobState::Completed && r.has_partition() && r.has_run())
        .map(|r| (r.partition.clone(), r.elapsed_minutes()))
        .collect();
    log_dropped("elapsed", records.len(), samples.len());
    samples
}

/// Node events that name a node and cover a known positive interval,
/// ordered by node then start time.
pub fn usable_events(events: &[NodeEvent]) -> Vec<NodeEvent> {
    let mut kept: Vec<NodeEvent> = events.iter().filter(|e| e.is_usable()).cloned().collect();
    log_dropped("event", events.len(), kept.len());
    kept.sort_by(|a, b| {
        a.node_name
            .cmp(&b.node_name)
            .then(a.time_start.cmp(&b.time_start))
    });
    kept
}

fn log_dropped(kind: &str, total: usize, kept: usize) {
    if kept < total {
        warn!("{kind} samples: dropped {} of {total} rows", total - kept);
    }
}
