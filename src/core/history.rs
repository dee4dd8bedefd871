//! State transition history tracking.
//!
//! A machine can optionally keep a record of every move of its state
//! pointers. Recording is off by default so the event path stays free of
//! allocation.

use super::event::EventType;
use super::outcome::Outcome;
use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single move of a machine's state pointers.
///
/// # Example
///
/// ```rust
/// use statem::core::{Outcome, StateId, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Some(StateId::new(0)),
///     to: StateId::new(1),
///     event_type: 3,
///     outcome: Outcome::StateChanged,
///     timestamp: Utc::now(),
/// };
/// assert!(!transition.is_self_loop());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being left; `None` when a machine without current state
    /// was forced into its error state
    pub from: Option<StateId>,
    /// The state entered
    pub to: StateId,
    /// Kind of the event that caused the move
    pub event_type: EventType,
    /// How the move was classified
    pub outcome: Outcome,
    /// When the move happened
    pub timestamp: DateTime<Utc>,
}

impl StateTransition {
    pub fn is_self_loop(&self) -> bool {
        self.from == Some(self.to)
    }
}

/// Ordered history of state transitions, optionally bounded.
///
/// When a limit is set, the oldest records are dropped once it is exceeded.
///
/// # Example
///
/// ```rust
/// use statem::core::{Outcome, StateHistory, StateId, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// for (from, to) in [(0, 1), (1, 2)] {
///     history.record(StateTransition {
///         from: Some(StateId::new(from)),
///         to: StateId::new(to),
///         event_type: 0,
///         outcome: Outcome::StateChanged,
///         timestamp: Utc::now(),
///     });
/// }
///
/// let path = history.get_path();
/// assert_eq!(path, vec![StateId::new(0), StateId::new(1), StateId::new(2)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: VecDeque<StateTransition>,
    limit: Option<usize>,
}

impl StateHistory {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history keeping at most `limit` records.
    pub fn bounded(limit: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Append a record, dropping the oldest one if the limit is exceeded.
    pub fn record(&mut self, transition: StateTransition) {
        if self.limit == Some(0) {
            return;
        }
        if let Some(limit) = self.limit {
            while self.transitions.len() >= limit {
                self.transitions.pop_front();
            }
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Starts with the `from` state of the oldest record (when known), then
    /// lists the `to` state of every record.
    pub fn get_path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(from) = self.transitions.front().and_then(|t| t.from) {
            path.push(from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Time elapsed between the oldest and the newest record.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> impl ExactSizeIterator<Item = &StateTransition> {
        self.transitions.iter()
    }

    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(from: usize, to: usize) -> StateTransition {
        StateTransition {
            from: Some(StateId::new(from)),
            to: StateId::new(to),
            event_type: 0,
            outcome: Outcome::StateChanged,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_adds_transition() {
        let mut history = StateHistory::new();
        history.record(moved(0, 1));

        assert_eq!(history.len(), 1);
        assert_eq!(history.last().map(|t| t.to), Some(StateId::new(1)));
    }

    #[test]
    fn bounded_history_drops_oldest() {
        let mut history = StateHistory::bounded(2);
        history.record(moved(0, 1));
        history.record(moved(1, 2));
        history.record(moved(2, 3));

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.get_path(),
            vec![StateId::new(1), StateId::new(2), StateId::new(3)]
        );
    }

    #[test]
    fn zero_limit_records_nothing() {
        let mut history = StateHistory::bounded(0);
        history.record(moved(0, 1));
        assert!(history.is_empty());
    }

    #[test]
    fn path_skips_unknown_origin() {
        let mut history = StateHistory::new();
        history.record(StateTransition {
            from: None,
            to: StateId::new(9),
            event_type: 1,
            outcome: Outcome::ErrorStateReached,
            timestamp: Utc::now(),
        });

        assert_eq!(history.get_path(), vec![StateId::new(9)]);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = StateHistory::new();
        let start = Utc::now();
        history.record(StateTransition {
            timestamp: start,
            ..moved(0, 1)
        });
        history.record(StateTransition {
            timestamp: start + chrono::Duration::milliseconds(25),
            ..moved(1, 2)
        });

        assert_eq!(history.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn self_loop_is_detected() {
        assert!(moved(4, 4).is_self_loop());
        assert!(!moved(4, 5).is_self_loop());
    }

    #[test]
    fn clear_empties_history() {
        let mut history = StateHistory::bounded(4);
        history.record(moved(0, 1));
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.limit(), Some(4));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::new();
        history.record(moved(0, 1));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
