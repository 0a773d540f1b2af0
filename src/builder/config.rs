//! Builder for constructing machine configurations.

use crate::config::{MachineConfig, StateDef};
use crate::core::Error;
use indexmap::IndexMap;

/// Builder for [`MachineConfig`] with a fluent API.
///
/// States appear in the order they are first mentioned, whether by
/// [`state`] or as the source of a [`transition`]; that order is the one
/// [`StateMachine::states`] enumerates.
///
/// # Example
///
/// ```rust
/// use gearshift::MachineConfigBuilder;
///
/// let config = MachineConfigBuilder::new()
///     .initial("off")
///     .transition("off", "toggle", "on")
///     .transition("on", "toggle", "off")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.initial, "off");
/// ```
///
/// [`state`]: MachineConfigBuilder::state
/// [`transition`]: MachineConfigBuilder::transition
/// [`StateMachine::states`]: crate::StateMachine::states
pub struct MachineConfigBuilder {
    initial: Option<String>,
    states: IndexMap<String, StateDef>,
    history_limit: Option<usize>,
}

impl MachineConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: IndexMap::new(),
            history_limit: None,
        }
    }

    /// Set the initial state (required).
    ///
    /// Not checked against the defined states; the configuration is
    /// permissive about dangling references.
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state, with no transitions yet.
    ///
    /// Declaring an existing state keeps its transitions and its position.
    pub fn state(mut self, id: impl Into<String>) -> Self {
        self.states.entry(id.into()).or_default();
        self
    }

    /// Add an event transition, declaring the source state if needed.
    ///
    /// The target state is not declared implicitly.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Bound the undo depth. Unset keeps the full history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Build the configuration.
    ///
    /// Fails with [`Error::Configuration`] when the initial state was never
    /// set or no states were defined.
    pub fn build(self) -> Result<MachineConfig, Error> {
        let initial = self.initial.ok_or_else(|| {
            Error::Configuration(
                "initial state not specified; call .initial(state) before .build()".to_string(),
            )
        })?;

        if self.states.is_empty() {
            return Err(Error::Configuration(
                "no states defined; add at least one state".to_string(),
            ));
        }

        Ok(MachineConfig {
            initial,
            states: self.states,
            history_limit: self.history_limit,
        })
    }
}

impl Default for MachineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_an_initial_state() {
        let result = MachineConfigBuilder::new().state("off").build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn builder_requires_at_least_one_state() {
        let result = MachineConfigBuilder::new().initial("off").build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn fluent_api_builds_a_config() {
        let config = MachineConfigBuilder::new()
            .initial("off")
            .transition("off", "toggle", "on")
            .transition("on", "toggle", "off")
            .build()
            .unwrap();

        assert_eq!(config.initial, "off");
        assert_eq!(
            config.state("off").unwrap().transitions.get("toggle"),
            Some(&"on".to_string())
        );
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn states_keep_first_mention_order() {
        let config = MachineConfigBuilder::new()
            .initial("b")
            .state("b")
            .state("a")
            .transition("c", "go", "a")
            .transition("a", "go", "b")
            .build()
            .unwrap();

        let ids: Vec<&str> = config.states.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn redeclaring_a_state_keeps_its_transitions() {
        let config = MachineConfigBuilder::new()
            .initial("off")
            .transition("off", "toggle", "on")
            .state("off")
            .build()
            .unwrap();

        assert_eq!(config.state("off").unwrap().transitions.len(), 1);
    }

    #[test]
    fn builder_does_not_validate_the_graph() {
        // Dangling initial and targets are accepted, matching the
        // permissive configuration semantics.
        let config = MachineConfigBuilder::new()
            .initial("ghost")
            .transition("off", "toggle", "nowhere")
            .build()
            .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn history_limit_is_carried_through() {
        let config = MachineConfigBuilder::new()
            .initial("off")
            .state("off")
            .history_limit(4)
            .build()
            .unwrap();

        assert_eq!(config.history_limit, Some(4));
    }
}
