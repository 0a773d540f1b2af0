//! Gearshift: a config-driven finite state machine with undo/redo history.
//!
//! A machine is built from a static [`MachineConfig`] naming its states and
//! their event-driven transitions. The machine tracks a single current
//! state, changes it either directly or by triggering a named event, and
//! keeps a linear undo/redo history of the states it moved through.
//!
//! # Core Concepts
//!
//! - **Configuration**: an immutable, insertion-ordered map of states to
//!   their outgoing transitions, supplied once at construction
//! - **Transitions**: event-labeled edges followed by `trigger`, or direct
//!   jumps via `change_state`
//! - **History**: two stacks navigated by `undo`/`redo`, independent of the
//!   transition rules, invalidated on the redo side by any new transition
//!
//! # Example
//!
//! ```rust
//! use gearshift::{machine_config, StateMachine};
//!
//! let config = machine_config! {
//!     initial: "off",
//!     states: {
//!         "off": { "toggle" => "on" },
//!         "on":  { "toggle" => "off" },
//!     }
//! }
//! .unwrap();
//!
//! let mut machine = StateMachine::new(config);
//! machine.trigger("toggle").unwrap();
//! assert_eq!(machine.current_state(), "on");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), "off");
//! assert!(machine.redo());
//! assert_eq!(machine.current_state(), "on");
//! ```

pub mod builder;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use builder::MachineConfigBuilder;
pub use config::{MachineConfig, StateDef};
pub use core::{Error, History, StateMachine, TransitionLog, TransitionRecord};
