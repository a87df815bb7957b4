//! State machine with linear undo/redo history.

use crate::config::{ConfigError, MachineConfig};
use crate::core::{Event, HistoryMove, State, TransitionTable, UndoHistory};
use crate::engine::error::TransitionError;

/// Finite state machine that remembers where it has been.
///
/// Every forward move (`change_state`, `trigger`) pushes the state being
/// left onto the undo stack and discards the redo stack. `undo` and `redo`
/// walk the two stacks without consulting the transition table.
///
/// # Example
///
/// ```rust
/// use retrace::StateMachine;
///
/// let mut machine: StateMachine<String, String> = StateMachine::from_json(r#"{
///     "initial": "idle",
///     "states": {
///         "idle": { "transitions": { "start": "running" } },
///         "running": { "transitions": { "stop": "idle" } }
///     }
/// }"#).unwrap();
///
/// machine.trigger("start").unwrap();
/// assert_eq!(machine.state(), "running");
///
/// assert!(machine.undo().moved());
/// assert_eq!(machine.state(), "idle");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine<S: State, E: Event> {
    table: TransitionTable<S, E>,
    initial: S,
    current: S,
    history: UndoHistory<S>,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Create a machine from an optional configuration.
    ///
    /// Fails with `ConfigError::Missing` when `config` is `None`.
    pub fn new(config: Option<MachineConfig<S, E>>) -> Result<Self, ConfigError> {
        let config = config.ok_or(ConfigError::Missing)?;
        Self::from_config(config)
    }

    /// Validate `config` and take ownership of its transition table.
    pub fn from_config(config: MachineConfig<S, E>) -> Result<Self, ConfigError> {
        config.validate()?;

        let initial = config.initial.clone();
        let table = TransitionTable::new(config.into_definitions());

        tracing::debug!(
            initial = initial.name(),
            states = table.len(),
            "State machine created"
        );

        Ok(Self {
            table,
            current: initial.clone(),
            initial,
            history: UndoHistory::new(),
        })
    }

    /// Parse, validate and build from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::from_config(MachineConfig::from_json(json)?)
    }

    /// Get current state
    pub fn state(&self) -> &S {
        &self.current
    }

    /// Get the configured initial state
    pub fn initial(&self) -> &S {
        &self.initial
    }

    pub fn table(&self) -> &TransitionTable<S, E> {
        &self.table
    }

    pub fn history(&self) -> &UndoHistory<S> {
        &self.history
    }

    /// Jump directly to `target`, ignoring the event structure.
    ///
    /// Any declared state is a valid target.
    pub fn change_state(&mut self, target: impl Into<S>) -> Result<&S, TransitionError> {
        let target = target.into();
        if !self.table.contains_state(&target) {
            return Err(TransitionError::UnknownState {
                state: target.name().to_string(),
            });
        }

        Ok(self.advance(target, None))
    }

    /// Follow the transition `event` names out of the current state.
    pub fn trigger(&mut self, event: impl Into<E>) -> Result<&S, TransitionError> {
        let event = event.into();
        let Some(target) = self.table.target(&self.current, &event).cloned() else {
            return Err(TransitionError::UnknownTransition {
                state: self.current.name().to_string(),
                event: event.name().to_string(),
            });
        };

        Ok(self.advance(target, Some(&event)))
    }

    /// Return to the configured initial state.
    ///
    /// History is left untouched: the undo and redo stacks keep every
    /// entry they held before the reset. Call `clear_history` as well for
    /// a clean slate.
    pub fn reset(&mut self) {
        tracing::debug!(
            from = self.current.name(),
            to = self.initial.name(),
            "State machine reset"
        );
        self.current = self.initial.clone();
    }

    /// Declared states, optionally narrowed to those where `event` is a
    /// valid trigger. Order follows declaration order.
    pub fn states(&self, event: Option<&E>) -> Vec<&S> {
        match event {
            Some(event) => self.table.states_with(event),
            None => self.table.states(),
        }
    }

    pub fn all_states(&self) -> Vec<&S> {
        self.table.states()
    }

    pub fn states_with(&self, event: &E) -> Vec<&S> {
        self.table.states_with(event)
    }

    /// Events that `trigger` accepts in the current state.
    pub fn available_events(&self) -> Vec<&E> {
        self.table.events(&self.current)
    }

    pub fn can_trigger(&self, event: &E) -> bool {
        self.table.target(&self.current, event).is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Step back to the previously active state.
    ///
    /// The state being left becomes available to `redo`.
    pub fn undo(&mut self) -> HistoryMove<S> {
        match self.history.step_back(&self.current) {
            Some(previous) => self.jump("Undo", previous),
            None => HistoryMove::NoHistory,
        }
    }

    /// Re-apply the most recently undone state.
    ///
    /// Redo does not push the state it leaves onto the undo stack. After
    /// `undo(); redo();` the state that was current before the redo can no
    /// longer be undone to, so a following `undo` goes back one step
    /// further than a symmetric history would.
    pub fn redo(&mut self) -> HistoryMove<S> {
        match self.history.step_forward() {
            Some(next) => self.jump("Redo", next),
            None => HistoryMove::NoHistory,
        }
    }

    /// Forget both undo and redo stacks. The current state is kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn advance(&mut self, target: S, event: Option<&E>) -> &S {
        let prior = std::mem::replace(&mut self.current, target);
        tracing::debug!(
            from = prior.name(),
            to = self.current.name(),
            event = event.map(|e| e.name()),
            "State changed"
        );
        self.history.record(prior);
        &self.current
    }

    fn jump(&mut self, direction: &'static str, target: S) -> HistoryMove<S> {
        let from = std::mem::replace(&mut self.current, target);
        tracing::debug!(
            from = from.name(),
            to = self.current.name(),
            undo = self.history.undo_len(),
            redo = self.history.redo_len(),
            "{direction} applied"
        );
        HistoryMove::Moved {
            from,
            to: self.current.clone(),
        }
    }
}
