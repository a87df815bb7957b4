//! Machine configuration.
//!
//! A configuration names the initial state and declares every state with
//! its event transitions:
//!
//! ```json
//! {
//!   "initial": "idle",
//!   "states": {
//!     "idle":    { "transitions": { "start": "running" } },
//!     "running": { "transitions": { "stop": "idle" } }
//!   }
//! }
//! ```
//!
//! Declaration order in the document is kept and becomes the order
//! reported by state listings.

mod error;
pub(crate) mod ordered;

pub use error::{ConfigError, ConfigProblem};

use crate::core::{Event, State};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Transitions declared for a single state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateDefinition<S: State, E: Event> {
    #[serde(default, with = "ordered")]
    pub transitions: Vec<(E, S)>,
}

impl<S: State, E: Event> Default for StateDefinition<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> StateDefinition<S, E> {
    /// A state with no outgoing transitions.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Add a transition taken when `event` fires in this state.
    pub fn on(mut self, event: impl Into<E>, target: impl Into<S>) -> Self {
        self.transitions.push((event.into(), target.into()));
        self
    }
}

/// Complete description of a machine: its initial state and every
/// declared state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MachineConfig<S: State, E: Event> {
    pub initial: S,
    #[serde(with = "ordered")]
    pub states: Vec<(S, StateDefinition<S, E>)>,
}

impl<S: State, E: Event> MachineConfig<S, E> {
    pub fn new(initial: impl Into<S>) -> Self {
        Self {
            initial: initial.into(),
            states: Vec::new(),
        }
    }

    /// Declare a state.
    pub fn state(mut self, state: impl Into<S>, definition: StateDefinition<S, E>) -> Self {
        self.states.push((state.into(), definition));
        self
    }

    /// Parse a JSON document.
    ///
    /// An empty document or a literal `null` means no configuration was
    /// given and yields `ConfigError::Missing`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Err(ConfigError::Missing);
        }

        let config: Option<Self> =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.ok_or(ConfigError::Missing)
    }

    /// Convert an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        if value.is_null() {
            return Err(ConfigError::Missing);
        }

        serde_json::from_value(value).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check that the configuration describes a consistent machine.
    ///
    /// All problems are collected so a broken document can be fixed in a
    /// single pass.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();
        let mut declared: HashSet<&S> = HashSet::with_capacity(self.states.len());

        for (state, _) in &self.states {
            if !declared.insert(state) {
                problems.push(ConfigProblem::DuplicateState {
                    state: state.name().to_string(),
                });
            }
        }

        if !declared.contains(&self.initial) {
            problems.push(ConfigProblem::UnknownInitialState {
                state: self.initial.name().to_string(),
            });
        }

        for (state, definition) in &self.states {
            let mut events: HashSet<&E> = HashSet::with_capacity(definition.transitions.len());

            for (event, target) in &definition.transitions {
                if !events.insert(event) {
                    problems.push(ConfigProblem::DuplicateEvent {
                        state: state.name().to_string(),
                        event: event.name().to_string(),
                    });
                }

                if !declared.contains(target) {
                    problems.push(ConfigProblem::UnknownTarget {
                        state: state.name().to_string(),
                        event: event.name().to_string(),
                        target: target.name().to_string(),
                    });
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid { problems })
        }
    }

    /// Flatten into `(state, transitions)` pairs for table construction.
    pub(crate) fn into_definitions(self) -> Vec<(S, Vec<(E, S)>)> {
        self.states
            .into_iter()
            .map(|(state, definition)| (state, definition.transitions))
            .collect()
    }
}
