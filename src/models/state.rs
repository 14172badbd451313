//! Job states and outcomes.
//!
//! The accounting store records job state as a small integer code. Only
//! completed and failed jobs count toward success/failure reporting.

use serde::{Deserialize, Serialize};

/// Scheduler job state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobState {
    Pending,
    Running,
    Suspended,
    Completed,
    Cancelled,
    Failed,
    Timeout,
    NodeFail,
    Preempted,
    BootFail,
    Deadline,
    OutOfMemory,
    /// Unrecognized state code.
    Other(i32),
}

impl JobState {
    /// Maps an accounting-store state code.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => JobState::Pending,
            1 => JobState::Running,
            2 => JobState::Suspended,
            3 => JobState::Completed,
            4 => JobState::Cancelled,
            5 => JobState::Failed,
            6 => JobState::Timeout,
            7 => JobState::NodeFail,
            8 => JobState::Preempted,
            9 => JobState::BootFail,
            10 => JobState::Deadline,
            11 => JobState::OutOfMemory,
            other => JobState::Other(other),
        }
    }

    /// The accounting-store state code.
    pub fn code(&self) -> i32 {
        match self {
            JobState::Pending => 0,
            JobState::Running => 1,
            JobState::Suspended => 2,
            JobState::Completed => 3,
            JobState::Cancelled => 4,
            JobState::Failed => 5,
            JobState::Timeout => 6,
            JobState::NodeFail => 7,
            JobState::Preempted => 8,
            JobState::BootFail => 9,
            JobState::Deadline => 10,
            JobState::OutOfMemory => 11,
            JobState::Other(code) => *code,
        }
    }

    /// Success/failure classification, if this state has one.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            JobState::Completed => Some(Outcome::Success),
            JobState::Failed => Some(Outcome::Failure),
            _ => None,
        }
    }
}

/// Success or failure of a finished job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Lowercase label (`success` / `failure`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Failure => "failure",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
