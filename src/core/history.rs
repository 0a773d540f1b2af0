//! Undo/redo history tracking.
//!
//! The machine's history is two stacks: states visited before the current
//! one, and states undone away from. Recording a new transition clears the
//! redo side, so redo is only reachable through undo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Record of a single successful transition.
///
/// Appended by the machine on every direct state change or triggered event.
/// Undo, redo, and reset navigate existing states and are not recorded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being transitioned from
    pub from: String,
    /// The state being transitioned to
    pub to: String,
    /// The event that drove the transition, or `None` for a direct change
    pub event: Option<String>,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Append-only log of successful transitions, oldest first.
#[derive(Clone, Debug, Default)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
}

impl TransitionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, record: TransitionRecord) {
        self.records.push(record);
    }

    /// All records in order of occurrence.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

/// Two-stack undo/redo store.
///
/// `record` pushes the outgoing value onto the undo stack and invalidates
/// the redo stack. `undo` and `redo` exchange the caller's current value
/// with the top of the respective stack, so a round trip restores both the
/// value and the stack depths.
///
/// An optional limit bounds the undo depth; recording past it drops the
/// oldest entries. Redo never needs trimming: it can only hold values a
/// prior undo moved out of the undo stack.
///
/// # Example
///
/// ```rust
/// use gearshift::History;
///
/// let mut history: History<&str> = History::new();
/// history.record("off");
///
/// let previous = history.undo("on");
/// assert_eq!(previous, Some("off"));
/// assert!(history.can_redo());
///
/// let next = history.redo("off");
/// assert_eq!(next, Some("on"));
/// ```
#[derive(Clone, Debug)]
pub struct History<T> {
    past: Vec<T>,
    future: Vec<T>,
    limit: Option<usize>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> History<T> {
    /// Create an unbounded history.
    pub fn new() -> Self {
        Self::with_limit(None)
    }

    /// Create a history with an optional undo depth bound.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            limit,
        }
    }

    /// Record the value being transitioned away from.
    ///
    /// Clears the redo stack and trims the oldest undo entries past the
    /// configured limit.
    pub fn record(&mut self, outgoing: T) {
        self.future.clear();
        self.past.push(outgoing);
        if let Some(limit) = self.limit {
            while self.past.len() > limit {
                self.past.remove(0);
            }
        }
        trace!(depth = self.past.len(), "transition recorded");
    }

    /// Step back: move `current` onto the redo stack and return the most
    /// recently recorded value. Returns `None`, mutating nothing, when
    /// there is nothing to undo.
    pub fn undo(&mut self, current: T) -> Option<T> {
        let previous = self.past.pop()?;
        self.future.push(current);
        trace!(depth = self.past.len(), "undo");
        Some(previous)
    }

    /// Step forward: move `current` onto the undo stack and return the most
    /// recently undone value. Returns `None`, mutating nothing, when there
    /// is nothing to redo.
    pub fn redo(&mut self, current: T) -> Option<T> {
        let next = self.future.pop()?;
        self.past.push(current);
        trace!(depth = self.past.len(), "redo");
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of values available to undo through.
    pub fn depth(&self) -> usize {
        self.past.len()
    }

    /// Number of values available to redo through.
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history: History<i32> = History::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.depth(), 0);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn record_enables_undo() {
        let mut history = History::new();
        history.record(1);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_returns_most_recent_value() {
        let mut history = History::new();
        history.record(1);
        history.record(2);

        assert_eq!(history.undo(3), Some(2));
        assert_eq!(history.undo(2), Some(1));
        assert_eq!(history.undo(1), None);
    }

    #[test]
    fn undo_on_empty_mutates_nothing() {
        let mut history: History<i32> = History::new();
        assert_eq!(history.undo(9), None);
        assert!(!history.can_redo());
        assert_eq!(history.depth(), 0);
    }

    #[test]
    fn redo_reverses_undo() {
        let mut history = History::new();
        history.record(1);

        let previous = history.undo(2).unwrap();
        assert_eq!(previous, 1);
        assert_eq!(history.redo(previous), Some(2));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_clears_redo_stack() {
        let mut history = History::new();
        history.record(1);
        history.undo(2);
        assert!(history.can_redo());

        history.record(5);
        assert!(!history.can_redo());
    }

    #[test]
    fn limit_drops_oldest_entries() {
        let mut history = History::with_limit(Some(2));
        history.record(1);
        history.record(2);
        history.record(3);

        assert_eq!(history.depth(), 2);
        assert_eq!(history.undo(4), Some(3));
        assert_eq!(history.undo(3), Some(2));
        assert_eq!(history.undo(2), None);
    }

    #[test]
    fn clear_empties_both_stacks() {
        let mut history = History::new();
        history.record(1);
        history.record(2);
        history.undo(3);

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn log_records_serialize_correctly() {
        let record = TransitionRecord {
            from: "off".to_string(),
            to: "on".to_string(),
            event: Some("toggle".to_string()),
            timestamp: Utc::now(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: TransitionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn log_clear_drops_records() {
        let mut log = TransitionLog::new();
        log.push(TransitionRecord {
            from: "a".to_string(),
            to: "b".to_string(),
            event: None,
            timestamp: Utc::now(),
        });
        assert_eq!(log.len(), 1);

        log.clear();
        assert!(log.is_empty());
    }
}
