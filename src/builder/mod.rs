//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and macros for creating state
//! machines with minimal boilerplate. The builder produces the same
//! `MachineConfig` a JSON document would, so both paths share validation.

pub mod machine;
pub mod macros;

pub use machine::StateMachineBuilder;

use crate::config::ConfigError;
use crate::core::{Event, State};
use crate::engine::StateMachine;

/// Build a machine from `(from, event, to)` triples.
///
/// States are declared in the order they first appear as a source; a
/// state that only ever appears as a target is declared after all sources.
///
/// # Example
///
/// ```
/// use retrace::builder::from_transitions;
/// use retrace::StateMachine;
///
/// let edges = [("off", "flip", "on"), ("on", "flip", "off")]
///     .map(|(f, e, t)| (f.to_string(), e.to_string(), t.to_string()));
///
/// let machine: StateMachine<String, String> = from_transitions("off", edges).unwrap();
///
/// assert_eq!(machine.state(), "off");
/// ```
pub fn from_transitions<S, E, I>(
    initial: impl Into<S>,
    transitions: I,
) -> Result<StateMachine<S, E>, ConfigError>
where
    S: State,
    E: Event,
    I: IntoIterator<Item = (S, E, S)>,
{
    let mut targets = Vec::new();
    let mut builder = StateMachineBuilder::<S, E>::new().initial(initial);

    for (from, event, to) in transitions {
        targets.push(to.clone());
        builder = builder.transition(from, event, to);
    }

    for target in targets {
        if !builder.declares(&target) {
            builder = builder.state(target, Default::default());
        }
    }

    builder.build()
}
