//! Errors raised by state-changing operations.

use thiserror::Error;

/// Errors that can occur when moving between states.
///
/// A failed call leaves the current state and both history stacks exactly
/// as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("State '{state}' does not exist")]
    UnknownState { state: String },

    #[error("Event '{event}' has no transition from state '{state}'")]
    UnknownTransition { state: String, event: String },
}
