//! Identifier traits for states and events.
//!
//! States and events are opaque, comparable tokens. Any type implementing
//! these traits can name the nodes and edges of a machine: plain `String`s
//! for data-driven machines, or enums generated by `state_enum!` and
//! `event_enum!` for typed ones.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state identifiers.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the undo/redo stacks
/// - `Eq` + `Hash`: states are registry keys
/// - `Debug`: states appear in error messages and logs
/// - `Serialize` + `Deserialize`: states are read from configuration
///
/// # Example
///
/// ```rust
/// use retrace::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for event identifiers.
///
/// Events carry no payload; they only select an edge out of the current
/// state.
pub trait Event:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl Event for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}
