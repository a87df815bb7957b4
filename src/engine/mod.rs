//! The state machine engine.
//!
//! `StateMachine` owns a validated transition table, the current state and
//! the undo/redo history. Two result categories are kept apart:
//!
//! - `TransitionError`: the caller asked for something the table does not
//!   allow (unknown state, unknown event). Nothing changes.
//! - `HistoryMove::NoHistory`: there is nothing to undo or redo. Expected
//!   and common, so it is a value rather than an error.

mod error;
mod machine;

pub use error::TransitionError;
pub use machine::StateMachine;
