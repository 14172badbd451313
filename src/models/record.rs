//! Job record model.
//!
//! A job record is one row supplied by the row source: a finished or
//! running job with its partition, owner and lifecycle timestamps.
//!
//! # Time Representation
//! Timestamps are unix seconds. A `time_start` of 0 means the job never
//! started.

use serde::{Deserialize, Serialize};

use super::JobState;

/// Seconds per minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// A job row as read from the scheduler accounting store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Scheduler job identifier.
    pub job_id: u64,
    /// Partition (queue) the job ran in. Empty if unknown.
    pub partition: String,
    /// Charging account.
    pub account: String,
    /// Submitting user.
    pub user: String,
    /// Final (or current) job state.
    pub state: JobState,
    /// Submission time (unix seconds).
    pub time_submit: i64,
    /// Start time (unix seconds, 0 = never started).
    pub time_start: i64,
    /// End time (unix seconds).
    pub time_end: i64,
}

impl JobRecord {
    /// Creates a record with the given ID.
    pub fn new(job_id: u64) -> Self {
        Self {
            job_id,
            partition: String::new(),
            account: String::new(),
            user: String::new(),
            state: JobState::Pending,
            time_submit: 0,
            time_start: 0,
            time_end: 0,
        }
    }

    /// Sets the partition.
    pub fn with_partition(mut self, partition: impl Into<String>) -> Self {
        self.partition = partition.into();
        self
    }

    /// Sets the account.
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    /// Sets the user.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Sets the job state.
    pub fn with_state(mut self, state: JobState) -> Self {
        self.state = state;
        self
    }

    /// Sets submit, start and end times (unix seconds).
    pub fn with_times(mut self, submit: i64, start: i64, end: i64) -> Self {
        self.time_submit = submit;
        self.time_start = start;
        self.time_end = end;
        self
    }

    /// Whole minutes between submission and start, truncated toward zero.
    ///
    /// Negative when clocks disagree; callers filter those out.
    pub fn wait_minutes(&self) -> i64 {
        self.time_start.saturating_sub(self.time_submit) / SECONDS_PER_MINUTE
    }

    /// Whole minutes between start and end, truncated toward zero.
    pub fn elapsed_minutes(&self) -> i64 {
        self.time_end.saturating_sub(self.time_start) / SECONDS_PER_MINUTE
    }

    /// Whether the job started and ran for a positive interval.
    #[inline]
    pub fn has_run(&self) -> bool {
        self.time_start != 0 && self.time_start < self.time_end
    }

    /// Whether the job can be attributed to a partition.
    #[inline]
    pub fn has_partition(&self) -> bool {
        !self.partition.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let rec = JobRecord::new(7)
            .with_partition("gpu")
            .with_account("physics")
            .with_user("alice")
            .with_state(JobState::Completed)
            .with_times(1_000, 1_600, 5_200);

        assert_eq!(rec.job_id, 7);
        assert_eq!(rec.partition, "gpu");
        assert_eq!(rec.account, "physics");
        assert_eq!(rec.user, "alice");
        assert_eq!(rec.state, JobState::Completed);
        assert_eq!(rec.wait_minutes(), 10);
        assert_eq!(rec.elapsed_minutes(), 60);
        assert!(rec.has_run());
        assert!(rec.has_partition());
    }

    #[test]
    fn test_partial_minutes_truncate() {
        let rec = JobRecord::new(1).with_times(0, 119, 179);
        assert_eq!(rec.wait_minutes(), 1);
        assert_eq!(rec.elapsed_minutes(), 1);

        let skewed = JobRecord::new(2).with_times(200, 100, 300);
        assert_eq!(skewed.wait_minutes(), -1);
    }

    #[test]
    fn test_extreme_timestamps_saturate() {
        let rec = JobRecord::new(1).with_times(i64::MIN, i64::MAX, i64::MIN);
        assert_eq!(rec.wait_minutes(), i64::MAX / 60);
        assert_eq!(rec.elapsed_minutes(), i64::MIN / 60);
    }

    #[test]
    fn test_not_run() {
        assert!(!JobRecord::new(1).with_times(10, 0, 50).has_run());
        assert!(!JobRecord::new(1).with_times(10, 50, 50).has_run());
        assert!(!JobRecord::new(1).has_partition());
    }
}
