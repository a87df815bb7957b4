//! Linear undo/redo history.
//!
//! Two stacks record previously active states. Forward moves
//! (`record`) truncate the redo path; there is no redo tree.

use super::state::State;

/// Outcome of an undo or redo request.
///
/// An empty stack is an expected, common situation and is reported as
/// `NoHistory` rather than as an error.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryMove<S: State> {
    /// The current state moved from `from` to `to`
    Moved { from: S, to: S },

    /// The relevant stack was empty; nothing changed
    NoHistory,
}

impl<S: State> HistoryMove<S> {
    /// Whether the current state changed.
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }

    /// The state that became current, if any.
    pub fn target(&self) -> Option<&S> {
        match self {
            Self::Moved { to, .. } => Some(to),
            Self::NoHistory => None,
        }
    }
}

impl<S: State> From<HistoryMove<S>> for bool {
    fn from(step: HistoryMove<S>) -> Self {
        step.moved()
    }
}

/// Undo and redo stacks of previously active states.
///
/// Both stacks are ordered oldest-first; the tail is the next state to
/// pop.
///
/// # Example
///
/// ```rust
/// use retrace::core::UndoHistory;
///
/// let mut history: UndoHistory<String> = UndoHistory::new();
/// history.record("a".to_string());
///
/// // Going back from "b" lands on "a" and remembers "b" for redo.
/// assert_eq!(history.step_back(&"b".to_string()), Some("a".to_string()));
/// assert_eq!(history.redo_stack(), ["b".to_string()]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndoHistory<S: State> {
    undo: Vec<S>,
    redo: Vec<S>,
}

impl<S: State> Default for UndoHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> UndoHistory<S> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// Record a forward move away from `prior`.
    ///
    /// The redo path is discarded unconditionally.
    pub fn record(&mut self, prior: S) {
        self.redo.clear();
        self.undo.push(prior);
    }

    /// Pop the most recent undo entry, parking `current` on the redo stack.
    ///
    /// Returns `None` and leaves both stacks alone when there is nothing
    /// to undo.
    pub fn step_back(&mut self, current: &S) -> Option<S> {
        let previous = self.undo.pop()?;
        self.redo.push(current.clone());
        Some(previous)
    }

    /// Pop the most recent redo entry.
    ///
    /// The state being left is *not* pushed onto the undo stack, so a
    /// redo never creates a fresh undo slot.
    pub fn step_forward(&mut self) -> Option<S> {
        self.redo.pop()
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Undo entries, oldest first.
    pub fn undo_stack(&self) -> &[S] {
        &self.undo
    }

    /// Redo entries, oldest first.
    pub fn redo_stack(&self) -> &[S] {
        &self.redo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn new_history_is_empty() {
        let history: UndoHistory<String> = UndoHistory::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo_len(), 0);
        assert_eq!(history.redo_len(), 0);
    }

    #[test]
    fn record_pushes_prior_state() {
        let mut history = UndoHistory::new();
        history.record(s("a"));
        history.record(s("b"));

        assert_eq!(history.undo_stack(), [s("a"), s("b")]);
    }

    #[test]
    fn record_discards_redo_path() {
        let mut history = UndoHistory::new();
        history.record(s("a"));
        let back = history.step_back(&s("b"));
        assert_eq!(back, Some(s("a")));
        assert!(history.can_redo());

        history.record(s("a"));

        assert!(!history.can_redo());
        assert_eq!(history.undo_stack(), [s("a")]);
    }

    #[test]
    fn step_back_on_empty_changes_nothing() {
        let mut history: UndoHistory<String> = UndoHistory::new();
        assert_eq!(history.step_back(&s("x")), None);
        assert!(!history.can_redo());
    }

    #[test]
    fn step_forward_does_not_touch_undo() {
        let mut history = UndoHistory::new();
        history.record(s("a"));
        history.record(s("b"));
        let _ = history.step_back(&s("c"));

        assert_eq!(history.step_forward(), Some(s("c")));
        assert_eq!(history.undo_stack(), [s("a")]);
        assert_eq!(history.step_forward(), None);
    }

    #[test]
    fn clear_empties_both_stacks() {
        let mut history = UndoHistory::new();
        history.record(s("a"));
        history.record(s("b"));
        let _ = history.step_back(&s("c"));

        history.clear();

        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn history_move_converts_to_bool() {
        let moved: HistoryMove<String> = HistoryMove::Moved {
            from: s("b"),
            to: s("a"),
        };
        assert!(moved.moved());
        assert_eq!(moved.target(), Some(&s("a")));
        assert!(bool::from(moved));

        let none: HistoryMove<String> = HistoryMove::NoHistory;
        assert!(!none.moved());
        assert_eq!(none.target(), None);
        assert!(!bool::from(none));
    }
}
