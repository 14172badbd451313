//! Success/failure counts per account and user.
//!
//! Counts finished jobs by `(account, outcome, user)` for the
//! success-versus-failure breakdown, and reports the date window the
//! counted jobs cover.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};
use crate::models::{JobRecord, Outcome};

/// Grouping key for outcome counts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OutcomeKey {
    pub account: String,
    pub outcome: Outcome,
    pub user: String,
}

/// Counts jobs per `(account, outcome, user)`.
///
/// Only rows that ran and have a partition are counted; states without an
/// outcome (timeouts, cancellations, ..) are skipped.
pub fn count_outcomes(records: &[JobRecord]) -> BTreeMap<OutcomeKey, u64> {
    let mut counts = BTreeMap::new();
    for rec in records.iter().filter(|r| r.has_partition() && r.has_run()) {
        let Some(outcome) = rec.state.outcome() else {
            continue;
        };
        let key = OutcomeKey {
            account: rec.account.clone(),
            outcome,
            user: rec.user.clone(),
        };
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// One `(account, outcome, user)` group and its job count.
///
/// Flat form of [`count_outcomes`] for presenters that need a list rather
/// than a keyed map (JSON objects only take string keys).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCount {
    pub account: String,
    pub outcome: Outcome,
    pub user: String,
    /// Number of jobs in the group.
    pub jobs: u64,
}

/// Flattens outcome counts, preserving key order.
pub fn outcome_rows(counts: &BTreeMap<OutcomeKey, u64>) -> Vec<OutcomeCount> {
    counts
        .iter()
        .map(|(key, &jobs)| OutcomeCount {
            account: key.account.clone(),
            outcome: key.outcome,
            user: key.user.clone(),
            jobs,
        })
        .collect()
}

/// Totals per outcome across all accounts.
pub fn outcome_totals(counts: &BTreeMap<OutcomeKey, u64>) -> BTreeMap<Outcome, u64> {
    let mut totals = BTreeMap::new();
    for (key, n) in counts {
        *totals.entry(key.outcome).or_insert(0) += n;
    }
    totals
}

/// Time span covered by a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWindow {
    /// Earliest covered time (unix seconds).
    pub start: i64,
    /// Latest covered time (unix seconds).
    pub end: i64,
}

impl ReportWindow {
    /// Window from the earliest span start to the latest span end.
    ///
    /// # Errors
    /// `EmptyInput` if `spans` yields nothing.
    pub fn from_spans<I>(spans: I) -> StatsResult<Self>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        spans
            .into_iter()
            .fold(None, |acc: Option<Self>, (start, end)| {
                Some(match acc {
                    Some(w) => Self {
                        start: w.start.min(start),
                        end: w.end.max(end),
                    },
                    None => Self { start, end },
                })
            })
            .ok_or(StatsError::EmptyInput)
    }

    /// Window spanning the end times of `records`.
    ///
    /// # Errors
    /// `EmptyInput` if `records` is empty.
    pub fn from_records(records: &[JobRecord]) -> StatsResult<Self> {
        Self::from_spans(records.iter().map(|r| (r.time_end, r.time_end)))
    }

    /// `dd/mm/YYYY to dd/mm/YYYY` in UTC.
    pub fn subtitle(&self) -> StatsResult<String> {
        Ok(format!("{} to {}", format_date(self.start)?, format_date(self.end)?))
    }
}

fn format_date(secs: i64) -> StatsResult<String> {
    let dt: DateTime<Utc> = DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| StatsError::invalid_input(format!("timestamp out of range: {secs}")))?;
    Ok(dt.format("%d/%m/%Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobState;

    fn job(id: u64, account: &str, user: &str, state: JobState, end: i64) -> JobRecord {
        JobRecord::new(id)
            .with_partition("cpu")
            .with_account(account)
            .with_user(user)
            .with_state(state)
            .with_times(1, 2, end)
    }

    #[test]
    fn test_count_outcomes() {
        let records = vec![
            job(1, "physics", "alice", JobState::Completed, 100),
            job(2, "physics", "alice", JobState::Completed, 100),
            job(3, "physics", "alice", JobState::Failed, 100),
            job(4, "chem", "bob", JobState::Completed, 100),
            job(5, "chem", "bob", JobState::Timeout, 100),
            job(6, "chem", "bob", JobState::Failed, 0),
        ];
        let counts = count_outcomes(&records);
        assert_eq!(counts.len(), 3);

        let key = |account: &str, outcome, user: &str| OutcomeKey {
            account: account.into(),
            outcome,
            user: user.into(),
        };
        assert_eq!(counts[&key("physics", Outcome::Success, "alice")], 2);
        assert_eq!(counts[&key("physics", Outcome::Failure, "alice")], 1);
        assert_eq!(counts[&key("chem", Outcome::Success, "bob")], 1);

        let rows = outcome_rows(&counts);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].account, "chem");
        assert_eq!(rows[0].jobs, 1);
        assert_eq!(rows[1].outcome, Outcome::Success);
        assert_eq!(rows[1].jobs, 2);

        let totals = outcome_totals(&counts);
        assert_eq!(totals[&Outcome::Success], 3);
        assert_eq!(totals[&Outcome::Failure], 1);
    }

    #[test]
    fn test_window_subtitle() {
        let records = vec![
            job(1, "a", "u", JobState::Completed, 1_700_000_000),
            job(2, "a", "u", JobState::Completed, 1_600_000_000),
        ];
        let window = ReportWindow::from_records(&records).unwrap();
        assert_eq!(window.start, 1_600_000_000);
        assert_eq!(window.end, 1_700_000_000);
        assert_eq!(window.subtitle().unwrap(), "13/09/2020 to 14/11/2023");
    }

    #[test]
    fn test_window_from_spans() {
        let window = ReportWindow::from_spans(vec![(50, 90), (10, 40), (60, 120)]).unwrap();
        assert_eq!(window, ReportWindow { start: 10, end: 120 });
    }

    #[test]
    fn test_window_empty() {
        assert!(matches!(
            ReportWindow::from_records(&[]),
            Err(StatsError::EmptyInput)
        ));
    }
}
