//! Builder for constructing state machines.

use crate::config::{ConfigError, MachineConfig, StateDefinition};
use crate::core::{Event, State};
use crate::engine::StateMachine;

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use retrace::builder::StateMachineBuilder;
/// use retrace::config::StateDefinition;
///
/// let machine = StateMachineBuilder::<String, String>::new()
///     .initial("locked")
///     .state("locked", StateDefinition::new().on("coin", "unlocked"))
///     .transition("unlocked", "push", "locked")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.state(), "locked");
/// assert_eq!(machine.all_states().len(), 2);
/// ```
pub struct StateMachineBuilder<S: State, E: Event> {
    initial: Option<S>,
    states: Vec<(S, StateDefinition<S, E>)>,
}

impl<S: State, E: Event> StateMachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<S>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with its transitions.
    pub fn state(mut self, state: impl Into<S>, definition: StateDefinition<S, E>) -> Self {
        self.states.push((state.into(), definition));
        self
    }

    /// Add a single transition.
    /// Declares `from` if it has not been declared yet.
    pub fn transition(
        mut self,
        from: impl Into<S>,
        event: impl Into<E>,
        to: impl Into<S>,
    ) -> Self {
        let from = from.into();
        let edge = (event.into(), to.into());

        match self.states.iter_mut().find(|(state, _)| *state == from) {
            Some((_, definition)) => definition.transitions.push(edge),
            None => {
                let mut definition = StateDefinition::new();
                definition.transitions.push(edge);
                self.states.push((from, definition));
            }
        }
        self
    }

    /// Whether `state` has been declared so far.
    pub fn declares(&self, state: &S) -> bool {
        self.states.iter().any(|(declared, _)| declared == state)
    }

    /// Assemble the configuration without building a machine.
    /// Fails with `ConfigError::MissingInitialState` if `.initial(..)` was
    /// never called.
    pub fn config(self) -> Result<MachineConfig<S, E>, ConfigError> {
        let initial = self.initial.ok_or(ConfigError::MissingInitialState)?;
        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing or the declared
    /// states are inconsistent.
    pub fn build(self) -> Result<StateMachine<S, E>, ConfigError> {
        StateMachine::from_config(self.config()?)
    }
}

impl<S: State, E: Event> Default for StateMachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
