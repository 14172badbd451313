//! Report assembly.
//!
//! Turns job rows into the data a presenter draws: per-partition wait
//! summaries with a labelled axis, per-partition elapsed percentile
//! curves, success/failure counts, and node event timelines.

use std::collections::BTreeMap;

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::error::{StatsError, StatsResult};
use crate::models::{JobRecord, NodeEvent};
use crate::outcome::{count_outcomes, outcome_rows, OutcomeCount, ReportWindow};
use crate::stats::{overall_max, percentile_curve, summarize_by, Axis, CurvePoint, Summary};
use crate::validation::{elapsed_samples, usable_events, wait_samples};

/// Wait-time summaries per partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitReport {
    /// Partition → summary, partitions ascending.
    pub summaries: BTreeMap<String, Summary>,
    /// Shared duration axis.
    pub axis: Axis,
}

/// Elapsed-time percentile curves per partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElapsedReport {
    /// Partition → curve, partitions ascending.
    pub curves: BTreeMap<String, Vec<CurvePoint>>,
}

/// Success/failure counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeReport {
    /// One entry per `(account, outcome, user)`, in that order.
    pub counts: Vec<OutcomeCount>,
    /// First to last end time of the counted jobs.
    pub window: ReportWindow,
}

/// Node events for a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventReport {
    /// Usable events ordered by node then start time.
    pub events: Vec<NodeEvent>,
    /// Earliest event start to latest event end.
    pub window: ReportWindow,
}

/// Builds the wait-time report.
///
/// # Errors
/// `EmptyInput` if no row survives sample extraction.
pub fn wait_report(records: &[JobRecord], config: &ReportConfig) -> StatsResult<WaitReport> {
    config.validate()?;
    let summaries = summarize_by(wait_samples(records), config.percentile)?;
    let max = overall_max(summaries.values()).ok_or(StatsError::EmptyInput)?;
    let axis = Axis::for_max(max, config.headroom, config.tick_count)?;

    info!(
        "wait report: {} partitions, longest wait {} min",
        summaries.len(),
        max
    );
    Ok(WaitReport { summaries, axis })
}

/// Builds the elapsed-time report from completed jobs.
///
/// # Errors
/// `EmptyInput` if no completed row survives sample extraction.
pub fn elapsed_report(records: &[JobRecord], config: &ReportConfig) -> StatsResult<ElapsedReport> {
    config.validate()?;

    let mut groups: BTreeMap<String, Vec<i64>> = BTreeMap::new();
    for (partition, minutes) in elapsed_samples(records) {
        groups.entry(partition).or_default().push(minutes);
    }
    if groups.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let curves = groups
        .into_iter()
        .map(|(partition, durations)| {
            percentile_curve(&durations, config.curve_step).map(|curve| (partition, curve))
        })
        .collect::<StatsResult<BTreeMap<_, _>>>()?;

    info!("elapsed report: {} partitions", curves.len());
    Ok(ElapsedReport { curves })
}

/// Builds the success/failure report.
///
/// # Errors
/// `EmptyInput` if no row has a success or failure outcome.
pub fn outcome_report(records: &[JobRecord]) -> StatsResult<OutcomeReport> {
    let counted: Vec<JobRecord> = records
        .iter()
        .filter(|r| r.has_partition() && r.has_run() && r.state.outcome().is_some())
        .cloned()
        .collect();
    let counts = outcome_rows(&count_outcomes(&counted));
    if counts.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let window = ReportWindow::from_records(&counted)?;

    info!("outcome report: {} groups", counts.len());
    Ok(OutcomeReport { counts, window })
}

/// Builds the node event report.
///
/// # Errors
/// `EmptyInput` if no event names a node with a known positive interval.
pub fn event_report(events: &[NodeEvent]) -> StatsResult<EventReport> {
    let events = usable_events(events);
    let window = ReportWindow::from_spans(events.iter().map(|e| (e.time_start, e.time_end)))?;

    info!(
        "event report: {} events from {} to {}",
        events.len(),
        window.start,
        window.end
    );
    Ok(EventReport { events, window })
}
