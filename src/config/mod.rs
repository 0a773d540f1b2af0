//! Machine configuration: states and their event-driven transitions.
//!
//! A configuration is supplied once at machine construction and never
//! mutated afterwards. State and transition maps are insertion-ordered, so
//! enumeration follows declaration order (or document order when loaded
//! from JSON).

use crate::core::Error;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Definition of a single state: its outgoing transitions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateDef {
    /// Event identifier to target state identifier, in declaration order.
    #[serde(default)]
    pub transitions: IndexMap<String, String>,
}

/// Static machine configuration.
///
/// Permissive by design: neither `initial` nor transition targets are
/// checked against `states` at construction. A dangling reference only
/// surfaces when the machine actually lands on it. Call [`validate`] to
/// opt into a full graph check.
///
/// The JSON shape is:
///
/// ```json
/// {
///   "initial": "off",
///   "states": {
///     "off": { "transitions": { "toggle": "on" } },
///     "on":  { "transitions": { "toggle": "off" } }
///   }
/// }
/// ```
///
/// # Example
///
/// ```rust
/// use gearshift::MachineConfig;
///
/// let config = MachineConfig::from_json(
///     r#"{
///         "initial": "off",
///         "states": {
///             "off": { "transitions": { "toggle": "on" } },
///             "on":  { "transitions": { "toggle": "off" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial, "off");
/// assert!(config.validate().is_ok());
/// ```
///
/// [`validate`]: MachineConfig::validate
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Identifier of the starting state.
    pub initial: String,
    /// State identifier to state definition, in declaration order.
    pub states: IndexMap<String, StateDef>,
    /// Maximum retained undo depth. `None` keeps the full history.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_limit: Option<usize>,
}

impl MachineConfig {
    /// Parse a configuration from its JSON representation.
    ///
    /// Fails with [`Error::Configuration`] when the input is empty or does
    /// not match the expected shape.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        if json.trim().is_empty() {
            return Err(Error::Configuration(
                "empty configuration input".to_string(),
            ));
        }
        serde_json::from_str(json).map_err(|e| Error::Configuration(e.to_string()))
    }

    /// Build a configuration from an in-memory JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, Error> {
        serde_json::from_value(value).map_err(|e| Error::Configuration(e.to_string()))
    }

    /// Look up a state definition.
    pub fn state(&self, id: &str) -> Option<&StateDef> {
        self.states.get(id)
    }

    /// Check that `initial` and every transition target name a defined
    /// state.
    ///
    /// Never called implicitly; the permissive default accepts dangling
    /// references until they are reached.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.states.contains_key(&self.initial) {
            return Err(Error::Configuration(format!(
                "initial state '{}' is not defined",
                self.initial
            )));
        }
        for (id, def) in &self.states {
            for (event, target) in &def.transitions {
                if !self.states.contains_key(target) {
                    return Err(Error::Configuration(format!(
                        "transition '{event}' from '{id}' targets undefined state '{target}'"
                    )));
                }
            }
        }
        Ok(())
    }
}
