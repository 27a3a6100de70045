//! View history stack for back navigation.
//!
//! # Responsibility
//! - Record views left through explicit go-to navigation.
//! - Answer whether a back affordance should exist at all.
//!
//! # Invariants
//! - LIFO: `pop` returns the most recently pushed view.
//! - Going home empties the stack unconditionally.
//! - `pop` on an empty stack is a no-op, not an error.

use crate::session::view::View;

/// Ordered record of previously active views.
#[derive(Debug, Clone, Default)]
pub struct NavigationHistory {
    stack: Vec<View>,
}

impl NavigationHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the view being left through an explicit go-to.
    pub fn push(&mut self, view: View) {
        self.stack.push(view);
    }

    /// Pops the most recent view, if any.
    pub fn pop(&mut self) -> Option<View> {
        self.stack.pop()
    }

    /// Empties the stack.
    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// Returns whether a back affordance should be shown.
    ///
    /// When this is false the affordance must be absent, not disabled.
    pub fn can_go_back(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Returns the number of recorded views.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::NavigationHistory;
    use crate::session::view::View;

    #[test]
    fn lifo_order() {
        let mut history = NavigationHistory::new();
        history.push(View::Day);
        history.push(View::Week);

        assert!(history.can_go_back());
        assert_eq!(history.pop(), Some(View::Week));
        assert_eq!(history.pop(), Some(View::Day));
        assert_eq!(history.pop(), None);
        assert!(!history.can_go_back());
    }

    #[test]
    fn clear_empties_everything() {
        let mut history = NavigationHistory::new();
        history.push(View::Month);
        history.push(View::Search);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.pop(), None);
    }
}
