//! Transition history tracking.
//!
//! The state machine records every committed transition inside its commit
//! critical section, so the order of records is exactly the commit order.

use super::state::GuidanceState;
use super::transition::Transition;
use crate::builder::DEFAULT_HISTORY_CAPACITY;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Record of a single committed transition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Commit sequence number, starting at 1
    pub sequence: u64,
    /// The committed transition
    #[serde(flatten)]
    pub transition: Transition,
    /// When the transition committed
    pub timestamp: DateTime<Utc>,
}

/// Bounded, ordered history of committed transitions.
///
/// Once `capacity` records are held the oldest is evicted. A capacity of
/// zero keeps no records but still counts commits.
///
/// # Example
///
/// ```rust
/// use guidance_state::core::{
///     GuidanceEvent, GuidanceState, Transition, TransitionHistory,
/// };
///
/// let mut history = TransitionHistory::with_capacity(8);
/// let t = Transition::resolve(GuidanceState::Startup, GuidanceEvent::FoundDrivers).unwrap();
/// history.record(t);
///
/// assert_eq!(
///     history.path(),
///     vec![GuidanceState::Startup, GuidanceState::DriversReady]
/// );
/// assert!(history.is_valid_walk());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionHistory {
    capacity: usize,
    committed: u64,
    records: VecDeque<TransitionRecord>,
}

impl Default for TransitionHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl TransitionHistory {
    /// Create an empty history holding at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            committed: 0,
            records: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
        }
    }

    /// Record a committed transition and return its sequence number.
    pub fn record(&mut self, transition: Transition) -> u64 {
        self.committed += 1;
        if self.capacity == 0 {
            self.records.clear();
            return self.committed;
        }
        while self.records.len() >= self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(TransitionRecord {
            sequence: self.committed,
            transition,
            timestamp: Utc::now(),
        });
        self.committed
    }

    /// Maximum number of records retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total number of transitions ever recorded, including evicted ones.
    pub fn committed(&self) -> u64 {
        self.committed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Retained records, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &TransitionRecord> {
        self.records.iter()
    }

    /// Most recent record, if any is retained.
    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.back()
    }

    /// States traversed by the retained records.
    ///
    /// The first element is the `from` state of the oldest record, followed
    /// by the `to` state of every record.
    pub fn path(&self) -> Vec<GuidanceState> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(first.transition.from);
        }
        path.extend(self.records.iter().map(|r| r.transition.to));
        path
    }

    /// Check that the retained records form a contiguous walk of the
    /// transition graph.
    pub fn is_valid_walk(&self) -> bool {
        let mut previous: Option<&TransitionRecord> = None;
        for record in &self.records {
            let t = record.transition;
            if Transition::resolve(t.from, t.event) != Some(t) {
                return false;
            }
            if let Some(prev) = previous {
                if prev.sequence + 1 != record.sequence || prev.transition.to != t.from {
                    return false;
                }
            }
            previous = Some(record);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuidanceEvent;

    fn resolve(from: GuidanceState, event: GuidanceEvent) -> Transition {
        Transition::resolve(from, event).unwrap()
    }

    #[test]
    fn new_history_is_empty() {
        let history = TransitionHistory::with_capacity(4);
        assert!(history.is_empty());
        assert_eq!(history.committed(), 0);
        assert!(history.path().is_empty());
        assert!(history.last().is_none());
        assert!(history.is_valid_walk());
    }

    #[test]
    fn record_assigns_increasing_sequence_numbers() {
        let mut history = TransitionHistory::with_capacity(4);

        let first = history.record(resolve(GuidanceState::Startup, GuidanceEvent::FoundDrivers));
        let second =
            history.record(resolve(GuidanceState::DriversReady, GuidanceEvent::ActivateRoute));

        assert_eq!((first, second), (1, 2));
        assert_eq!(history.last().unwrap().sequence, 2);
    }

    #[test]
    fn path_follows_committed_states() {
        let mut history = TransitionHistory::with_capacity(8);
        history.record(resolve(GuidanceState::Startup, GuidanceEvent::FoundDrivers));
        history.record(resolve(GuidanceState::DriversReady, GuidanceEvent::ActivateRoute));
        history.record(resolve(GuidanceState::Active, GuidanceEvent::StartRoute));

        assert_eq!(
            history.path(),
            vec![
                GuidanceState::Startup,
                GuidanceState::DriversReady,
                GuidanceState::Active,
                GuidanceState::Engaged,
            ]
        );
        assert!(history.is_valid_walk());
    }

    #[test]
    fn oldest_records_are_evicted_at_capacity() {
        let mut history = TransitionHistory::with_capacity(2);
        history.record(resolve(GuidanceState::Startup, GuidanceEvent::FoundDrivers));
        history.record(resolve(GuidanceState::DriversReady, GuidanceEvent::ActivateRoute));
        history.record(resolve(GuidanceState::Active, GuidanceEvent::Disengage));

        assert_eq!(history.len(), 2);
        assert_eq!(history.committed(), 3);
        assert_eq!(history.records().next().unwrap().sequence, 2);
        assert!(history.is_valid_walk());
    }

    #[test]
    fn zero_capacity_counts_without_retaining() {
        let mut history = TransitionHistory::with_capacity(0);
        assert_eq!(history.record(resolve(GuidanceState::Startup, GuidanceEvent::Panic)), 1);
        assert!(history.is_empty());
        assert_eq!(history.committed(), 1);
    }

    #[test]
    fn disconnected_records_are_not_a_valid_walk() {
        let mut history = TransitionHistory::with_capacity(4);
        history.record(resolve(GuidanceState::Startup, GuidanceEvent::FoundDrivers));
        history.record(resolve(GuidanceState::Active, GuidanceEvent::StartRoute));

        assert!(!history.is_valid_walk());
    }

    #[test]
    fn huge_capacity_does_not_preallocate() {
        let mut history = TransitionHistory::with_capacity(usize::MAX);
        history.record(resolve(GuidanceState::Startup, GuidanceEvent::FoundDrivers));

        assert_eq!(history.capacity(), usize::MAX);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn oversized_deserialized_history_shrinks_on_record() {
        let mut full = TransitionHistory::with_capacity(4);
        full.record(resolve(GuidanceState::Startup, GuidanceEvent::FoundDrivers));
        full.record(resolve(GuidanceState::DriversReady, GuidanceEvent::ActivateRoute));
        full.record(resolve(GuidanceState::Active, GuidanceEvent::StartRoute));

        let mut json = serde_json::to_value(&full).unwrap();
        json["capacity"] = serde_json::json!(1);
        let mut history: TransitionHistory = serde_json::from_value(json).unwrap();
        assert_eq!(history.len(), 3);

        history.record(resolve(GuidanceState::Engaged, GuidanceEvent::FinishRoute));

        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().sequence, 4);
        assert_eq!(
            history.path(),
            vec![GuidanceState::Engaged, GuidanceState::DriversReady]
        );
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = TransitionHistory::with_capacity(4);
        history.record(resolve(GuidanceState::Startup, GuidanceEvent::FoundDrivers));

        let json = serde_json::to_string(&history).unwrap();
        assert!(json.contains("\"event\":\"FOUND_DRIVERS\""));

        let deserialized: TransitionHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.path(), history.path());
        assert_eq!(deserialized.committed(), 1);
    }
}
