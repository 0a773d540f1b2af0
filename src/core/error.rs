//! Error types for configuration loading and machine operations.

use thiserror::Error;

/// Errors raised by configuration loading and state machine operations.
///
/// Every failure is reported before any instance state is mutated: a machine
/// that returns an error is exactly the machine from before the call.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration is absent, malformed, or incomplete.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// A direct state change named a state the configuration does not define.
    #[error("No such state '{state}' in configuration")]
    InvalidState { state: String },

    /// A triggered event has no transition defined for the current state.
    #[error("No transition for event '{event}' from state '{state}'")]
    InvalidEvent { event: String, state: String },
}
