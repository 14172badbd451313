//! Node event model.
//!
//! A node event is a period during which a compute node was drained,
//! down or otherwise flagged, with the reason the scheduler recorded.

use serde::{Deserialize, Serialize};

/// A node event row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeEvent {
    /// Node host name. Empty for cluster-wide events.
    pub node_name: String,
    /// Free-text reason given by the administrator or scheduler.
    pub reason: String,
    /// Start time (unix seconds, 0 = unknown).
    pub time_start: i64,
    /// End time (unix seconds).
    pub time_end: i64,
}

impl NodeEvent {
    /// Creates an event for the given node.
    pub fn new(node_name: impl Into<String>) -> Self {
        Self {
            node_name: node_name.into(),
            reason: String::new(),
            time_start: 0,
            time_end: 0,
        }
    }

    /// Sets the reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Sets start and end times (unix seconds).
    pub fn with_times(mut self, start: i64, end: i64) -> Self {
        self.time_start = start;
        self.time_end = end;
        self
    }

    /// Whole minutes the event lasted, truncated toward zero.
    pub fn duration_minutes(&self) -> i64 {
        self.time_end.saturating_sub(self.time_start) / 60
    }

    /// Whether the event names a node and covers a known, positive interval.
    pub fn is_usable(&self) -> bool {
        !self.node_name.is_empty() && self.time_start != 0 && self.time_start < self.time_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builder() {
        let ev = NodeEvent::new("node001")
            .with_reason("bad DIMM")
            .with_times(600, 4200);
        assert_eq!(ev.node_name, "node001");
        assert_eq!(ev.reason, "bad DIMM");
        assert_eq!(ev.duration_minutes(), 60);
        assert!(ev.is_usable());
    }

    #[test]
    fn test_event_unusable() {
        assert!(!NodeEvent::new("").with_times(1, 2).is_usable());
        assert!(!NodeEvent::new("n1").with_times(0, 2).is_usable());
        assert!(!NodeEvent::new("n1").with_times(5, 5).is_usable());
    }
}
