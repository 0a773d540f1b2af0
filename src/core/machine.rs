//! The state machine: validated transitions over a static configuration.

use crate::config::MachineConfig;
use crate::core::error::Error;
use crate::core::history::{History, TransitionLog, TransitionRecord};
use chrono::Utc;
use tracing::debug;

/// A finite state machine with a linear undo/redo history.
///
/// The machine owns its configuration and tracks a single current state.
/// State changes happen either directly ([`change_state`]) or through a
/// named event ([`trigger`]); both push the outgoing state onto the undo
/// stack and invalidate any pending redo. Undo and redo navigate previously
/// visited states regardless of whether a configured transition permits the
/// move.
///
/// Construction is total: like the configuration itself, the machine does
/// not check that `initial` names a defined state. A dangling current state
/// simply has no triggerable events.
///
/// # Example
///
/// ```rust
/// use gearshift::{MachineConfigBuilder, StateMachine};
///
/// let config = MachineConfigBuilder::new()
///     .initial("off")
///     .transition("off", "toggle", "on")
///     .transition("on", "toggle", "off")
///     .build()
///     .unwrap();
///
/// let mut machine = StateMachine::new(config);
/// assert_eq!(machine.current_state(), "off");
///
/// machine.trigger("toggle").unwrap();
/// assert_eq!(machine.current_state(), "on");
///
/// assert!(machine.undo());
/// assert_eq!(machine.current_state(), "off");
/// assert!(machine.redo());
/// assert_eq!(machine.current_state(), "on");
/// ```
///
/// [`change_state`]: StateMachine::change_state
/// [`trigger`]: StateMachine::trigger
pub struct StateMachine {
    config: MachineConfig,
    current: String,
    history: History<String>,
    log: TransitionLog,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state, with empty
    /// history.
    pub fn new(config: MachineConfig) -> Self {
        let current = config.initial.clone();
        let history = History::with_limit(config.history_limit);
        Self {
            config,
            current,
            history,
            log: TransitionLog::new(),
        }
    }

    /// Parse a configuration from JSON and construct a machine from it.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(Self::new(MachineConfig::from_json(json)?))
    }

    /// The active state identifier.
    pub fn current_state(&self) -> &str {
        &self.current
    }

    /// The configuration this machine was built from.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Go directly to `target`, recording the outgoing state for undo.
    ///
    /// Fails with [`Error::InvalidState`] when `target` is not a configured
    /// state, leaving the machine untouched.
    pub fn change_state(&mut self, target: &str) -> Result<(), Error> {
        if !self.config.states.contains_key(target) {
            return Err(Error::InvalidState {
                state: target.to_string(),
            });
        }
        self.commit(target.to_string(), None);
        Ok(())
    }

    /// Follow the current state's transition for `event`.
    ///
    /// Fails with [`Error::InvalidEvent`] when the current state defines no
    /// transition for `event`, leaving the machine untouched. A current
    /// state that is not itself a configured state has no transitions at
    /// all, so any trigger from it fails the same way.
    pub fn trigger(&mut self, event: &str) -> Result<(), Error> {
        let target = self
            .config
            .state(&self.current)
            .and_then(|def| def.transitions.get(event))
            .ok_or_else(|| Error::InvalidEvent {
                event: event.to_string(),
                state: self.current.clone(),
            })?
            .clone();
        self.commit(target, Some(event.to_string()));
        Ok(())
    }

    fn commit(&mut self, target: String, event: Option<String>) {
        let from = std::mem::replace(&mut self.current, target);
        debug!(
            from = %from,
            to = %self.current,
            event = event.as_deref(),
            "state changed"
        );
        self.log.push(TransitionRecord {
            from: from.clone(),
            to: self.current.clone(),
            event,
            timestamp: Utc::now(),
        });
        self.history.record(from);
    }

    /// Return to the initial state unconditionally.
    ///
    /// History and the transition log are left intact, so undo still steps
    /// back through states visited before the reset.
    pub fn reset(&mut self) {
        self.current = self.config.initial.clone();
        debug!(to = %self.current, "reset to initial state");
    }

    /// Enumerate state identifiers in declaration order.
    ///
    /// With `None`, every configured state. With `Some(event)`, only the
    /// states defining a transition for that event. Always returns a list,
    /// possibly empty.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            None => self.config.states.keys().map(String::as_str).collect(),
            Some(event) => self
                .config
                .states
                .iter()
                .filter(|(_, def)| def.transitions.contains_key(event))
                .map(|(id, _)| id.as_str())
                .collect(),
        }
    }

    /// Step back to the previously visited state.
    ///
    /// Returns `false`, mutating nothing, when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        if let Some(previous) = self.history.undo(self.current.clone()) {
            debug!(from = %self.current, to = %previous, "undo");
            self.current = previous;
        }
        true
    }

    /// Step forward to a state undone away from.
    ///
    /// Returns `false`, mutating nothing, when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        if let Some(next) = self.history.redo(self.current.clone()) {
            debug!(from = %self.current, to = %next, "redo");
            self.current = next;
        }
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The undo/redo stacks.
    pub fn history(&self) -> &History<String> {
        &self.history
    }

    /// Timestamped records of successful transitions, oldest first.
    ///
    /// Undo, redo, and reset do not append records.
    pub fn transition_log(&self) -> &[TransitionRecord] {
        self.log.records()
    }

    /// Empty the undo and redo stacks and the transition log.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.log.clear();
        debug!("history cleared");
    }
}
