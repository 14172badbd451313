//! Report domain models.
//!
//! Row-source data as the statistics layer sees it.
//!
//! # Domain Mappings
//!
//! | u-report | Scheduler accounting | Wait report | Elapsed report |
//! |----------|---------------------|-------------|----------------|
//! | JobRecord | Job table row | submit → start | start → end |
//! | JobState | State code | any | Completed only |
//! | Outcome | Completed / Failed | – | – |
//! | NodeEvent | Event table row | – | – |

mod event;
mod record;
mod state;

pub use event::NodeEvent;
pub use record::JobRecord;
pub use state::{JobState, Outcome};
