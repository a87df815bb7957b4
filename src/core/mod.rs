//! Core state machine types.
//!
//! This module contains the building blocks the engine is made of:
//! - Identifier traits for states and events
//! - The immutable transition table
//! - The linear undo/redo history
//!
//! Nothing in here performs I/O or logging; the `machine` module wires
//! these pieces together.

mod history;
mod state;
mod table;

pub use history::{HistoryMove, UndoHistory};
pub use state::{Event, State};
pub use table::TransitionTable;
