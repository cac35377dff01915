//! Browser-history model.
//!
//! # Responsibilities
//! - Track the entry stack the browser would hold, with a cursor
//! - Distinguish the initial home load (sentinel) from ordinary paths
//! - Translate a popped state into a navigation directive
//!
//! # Design Decisions
//! - The stack is seeded with `Home`, mirroring the replace-state the app
//!   performs on first load
//! - Pushing truncates any forward branch, like a real browser
//! - Popping the home sentinel demands a full reload instead of a re-render;
//!   the initial page was never rendered through the template set

use std::fmt;

/// One history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryState {
    /// The application's initial load.
    Home,
    /// An ordinary navigable path.
    Path(String),
}

impl fmt::Display for HistoryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryState::Home => f.write_str("<HOME>"),
            HistoryState::Path(p) => f.write_str(p),
        }
    }
}

/// What the caller must do after a back/forward event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopAction {
    /// Event carried no state; do nothing.
    Ignore,
    /// The home sentinel was popped; a full page reload is required.
    Reload,
    /// Re-run navigation for this path without pushing a new entry.
    Navigate(String),
}

/// Translate a popped state into its directive.
pub fn pop_action(state: Option<&HistoryState>) -> PopAction {
    match state {
        None => PopAction::Ignore,
        Some(HistoryState::Home) => PopAction::Reload,
        Some(HistoryState::Path(p)) => PopAction::Navigate(p.clone()),
    }
}

/// Explicit model of the browser history stack.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: Vec<HistoryState>,
    cursor: usize,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryState::Home],
            cursor: 0,
        }
    }

    /// Push a new entry for `path`, discarding any forward branch.
    pub fn push(&mut self, path: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryState::Path(path.to_string()));
        self.cursor = self.entries.len() - 1;
    }

    /// Step back one entry, returning the state now current.
    pub fn back(&mut self) -> Option<&HistoryState> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward one entry, returning the state now current.
    pub fn forward(&mut self) -> Option<&HistoryState> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    pub fn current(&self) -> &HistoryState {
        &self.entries[self.cursor]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_home() {
        let history = HistoryStack::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), &HistoryState::Home);
    }

    #[test]
    fn test_push_adds_exactly_one_entry() {
        let mut history = HistoryStack::new();
        history.push("/about-us");
        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), &HistoryState::Path("/about-us".into()));
    }

    #[test]
    fn test_back_reaches_home_sentinel() {
        let mut history = HistoryStack::new();
        history.push("/learn");
        let state = history.back().cloned();
        assert_eq!(state, Some(HistoryState::Home));
        assert!(history.back().is_none(), "cannot go back past the start");
    }

    #[test]
    fn test_push_truncates_forward_branch() {
        let mut history = HistoryStack::new();
        history.push("/learn");
        history.push("/about-us");
        history.back();
        history.push("/challenge");
        assert_eq!(history.len(), 3);
        assert_eq!(history.current(), &HistoryState::Path("/challenge".into()));
        assert!(history.forward().is_none());
    }

    #[test]
    fn test_pop_action_directives() {
        assert_eq!(pop_action(None), PopAction::Ignore);
        assert_eq!(pop_action(Some(&HistoryState::Home)), PopAction::Reload);
        assert_eq!(
            pop_action(Some(&HistoryState::Path("/topics/energy".into()))),
            PopAction::Navigate("/topics/energy".into())
        );
    }
}
