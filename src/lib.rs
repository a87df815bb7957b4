//! Retrace: a finite state machine with linear undo/redo history
//!
//! A machine is declared as a set of named states, each with named events
//! leading to other states. Callers move between states either by event
//! (`trigger`) or by direct jump (`change_state`), and can walk back and
//! forth through the states they visited (`undo`/`redo`) like an edit
//! history.
//!
//! # Core Concepts
//!
//! - **State / Event**: opaque identifiers via the `State` and `Event`
//!   traits. `String` implements both; `state_enum!` and `event_enum!`
//!   generate typed enums.
//! - **Transition table**: immutable, validated at construction.
//! - **History**: two linear stacks. Any forward move discards the redo
//!   path; there is no redo tree.
//!
//! # Example
//!
//! ```rust
//! use retrace::{HistoryMove, StateMachine, TransitionError};
//!
//! let mut machine: StateMachine<String, String> = StateMachine::from_json(r#"{
//!     "initial": "A",
//!     "states": {
//!         "A": { "transitions": { "go": "B" } },
//!         "B": { "transitions": {} }
//!     }
//! }"#).unwrap();
//!
//! machine.trigger("go").unwrap();
//! assert_eq!(machine.state(), "B");
//!
//! assert!(matches!(
//!     machine.trigger("go"),
//!     Err(TransitionError::UnknownTransition { .. })
//! ));
//!
//! assert!(machine.undo().moved());
//! assert_eq!(machine.state(), "A");
//! assert!(machine.redo().moved());
//! assert_eq!(machine.redo(), HistoryMove::NoHistory);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::StateMachineBuilder;
pub use config::{ConfigError, ConfigProblem, MachineConfig, StateDefinition};
pub use crate::core::{Event, HistoryMove, State, TransitionTable, UndoHistory};
pub use engine::{StateMachine, TransitionError};
