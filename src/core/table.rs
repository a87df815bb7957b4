//! Immutable registry of states and their event transitions.

use super::state::{Event, State};
use std::collections::HashMap;

#[derive(Clone, Debug)]
struct StateEntry<S: State, E: Event> {
    state: S,
    transitions: Vec<(E, S)>,
}

/// Mapping from each declared state to its `event -> target` map.
///
/// Declaration order is preserved for every listing. The table is built
/// once from validated configuration and never changes afterwards.
///
/// # Example
///
/// ```rust
/// use retrace::StateMachine;
///
/// let machine: StateMachine<String, String> = StateMachine::from_json(
///     r#"{ "initial": "a", "states": { "a": { "transitions": { "go": "b" } }, "b": {} } }"#,
/// )
/// .unwrap();
///
/// let table = machine.table();
/// assert_eq!(table.target(&"a".to_string(), &"go".to_string()), Some(&"b".to_string()));
/// assert_eq!(table.target(&"b".to_string(), &"go".to_string()), None);
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State, E: Event> {
    entries: Vec<StateEntry<S, E>>,
    index: HashMap<S, usize>,
}

impl<S: State, E: Event> TransitionTable<S, E> {
    /// Build a table from `(state, transitions)` pairs in declaration order.
    ///
    /// Only called with validated configuration. A state declared twice
    /// would keep its first position and the later declaration's
    /// transitions.
    pub(crate) fn new(definitions: Vec<(S, Vec<(E, S)>)>) -> Self {
        let mut entries: Vec<StateEntry<S, E>> = Vec::with_capacity(definitions.len());
        let mut index: HashMap<S, usize> = HashMap::with_capacity(definitions.len());

        for (state, transitions) in definitions {
            match index.get(&state) {
                Some(&slot) => entries[slot].transitions = transitions,
                None => {
                    index.insert(state.clone(), entries.len());
                    entries.push(StateEntry { state, transitions });
                }
            }
        }

        Self { entries, index }
    }

    pub fn contains_state(&self, state: &S) -> bool {
        self.index.contains_key(state)
    }

    /// Resolve `event` from `state`.
    pub fn target(&self, state: &S, event: &E) -> Option<&S> {
        self.entry(state)?
            .transitions
            .iter()
            .find(|(candidate, _)| candidate == event)
            .map(|(_, target)| target)
    }

    /// Events with a transition out of `state`, in declaration order.
    ///
    /// Undeclared states have no events.
    pub fn events(&self, state: &S) -> Vec<&E> {
        self.entry(state)
            .map(|entry| entry.transitions.iter().map(|(event, _)| event).collect())
            .unwrap_or_default()
    }

    /// All declared states, in declaration order.
    pub fn states(&self) -> Vec<&S> {
        self.entries.iter().map(|entry| &entry.state).collect()
    }

    /// Declared states from which `event` is a valid trigger.
    pub fn states_with(&self, event: &E) -> Vec<&S> {
        self.entries
            .iter()
            .filter(|entry| entry.transitions.iter().any(|(candidate, _)| candidate == event))
            .map(|entry| &entry.state)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, state: &S) -> Option<&StateEntry<S, E>> {
        self.index.get(state).map(|&slot| &self.entries[slot])
    }
}
