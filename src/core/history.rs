//! Transition history tracking.
//!
//! Provides immutable tracking of device transitions over time. The history
//! lives in memory only; it is serializable so callers can inspect or log it.

use super::action::Trigger;
use super::notice::Notice;
use super::state::DeviceState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single transition.
///
/// # Example
///
/// ```rust
/// use gumball::core::{Action, DeviceState, Notice, TransitionRecord, Trigger};
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: DeviceState::NoCoin,
///     to: DeviceState::HasCoin,
///     trigger: Trigger::Action(Action::InsertPayment),
///     notice: Notice::PaymentAccepted,
///     inventory: 5,
///     timestamp: Utc::now(),
/// };
/// assert!(record.changed_state());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being transitioned from
    pub from: DeviceState,
    /// The state being transitioned to
    pub to: DeviceState,
    /// What caused the transition
    pub trigger: Trigger,
    /// Feedback emitted by the transition
    pub notice: Notice,
    /// Inventory after the transition
    pub inventory: u32,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of transitions.
///
/// The `record` method returns a new history with the transition added;
/// owners that update in place use `push`. An optional retention limit drops
/// the oldest records once exceeded, including when deserializing.
///
/// # Example
///
/// ```rust
/// use gumball::core::{Action, DeviceState, Notice, StateHistory, TransitionRecord, Trigger};
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(TransitionRecord {
///     from: DeviceState::NoCoin,
///     to: DeviceState::HasCoin,
///     trigger: Trigger::Action(Action::InsertPayment),
///     notice: Notice::PaymentAccepted,
///     inventory: 1,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.path();
/// assert_eq!(path, vec![DeviceState::NoCoin, DeviceState::HasCoin]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "HistoryRepr")]
pub struct StateHistory {
    records: VecDeque<TransitionRecord>,
    limit: Option<usize>,
}

#[derive(Deserialize)]
struct HistoryRepr {
    records: VecDeque<TransitionRecord>,
    limit: Option<usize>,
}

impl From<HistoryRepr> for StateHistory {
    fn from(repr: HistoryRepr) -> Self {
        let mut history = Self {
            records: repr.records,
            limit: repr.limit,
        };
        history.enforce_limit();
        history
    }
}

impl StateHistory {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history that keeps at most `limit` records.
    ///
    /// A limit of zero keeps nothing.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: VecDeque::new(),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a transition, returning a new history.
    ///
    /// This does not mutate the existing history.
    ///
    /// ```rust
    /// use gumball::core::{Action, DeviceState, Notice, StateHistory, TransitionRecord, Trigger};
    /// use chrono::Utc;
    ///
    /// let history = StateHistory::new();
    /// let next = history.record(TransitionRecord {
    ///     from: DeviceState::HasCoin,
    ///     to: DeviceState::NoCoin,
    ///     trigger: Trigger::Action(Action::EjectPayment),
    ///     notice: Notice::PaymentRefunded,
    ///     inventory: 3,
    ///     timestamp: Utc::now(),
    /// });
    /// assert_eq!(next.len(), 1);
    /// assert!(history.is_empty()); // Original unchanged
    /// ```
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut next = self.clone();
        next.push(record);
        next
    }

    /// Append a transition in place, dropping the oldest records past the
    /// limit.
    pub fn push(&mut self, record: TransitionRecord) {
        self.records.push_back(record);
        self.enforce_limit();
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            while self.records.len() > limit {
                self.records.pop_front();
            }
        }
    }

    /// All retained records, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &TransitionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.back()
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained record followed by
    /// the `to` state of each record.
    pub fn path(&self) -> Vec<DeviceState> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|r| r.to));
        path
    }

    /// Number of retained records in which an item actually left the chute.
    pub fn dispense_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.notice, Notice::Dispensed { .. }))
            .count()
    }

    /// Calculate total duration from first to last retained record.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
