//! Session reducer combining selection and navigation.
//!
//! # Responsibility
//! - Own the one process-lifetime mutable state of this subsystem.
//! - Expose named transitions so the presentation shell stays a thin
//!   consumer and the machine is testable without a rendering surface.
//!
//! # Invariants
//! - One input event maps to one transition; no partial states escape.
//! - View changes reset selection, since the new view is a new context.
//! - Passive view switching never touches history.

use crate::model::entry::EntryId;
use crate::session::navigation::NavigationHistory;
use crate::session::selection::{Direction, Panel, SelectionState};
use crate::session::view::View;
use log::debug;

/// Process-lifetime session state, owned by the presentation shell.
#[derive(Debug, Clone)]
pub struct SessionState {
    selection: SelectionState,
    current_view: View,
    history: NavigationHistory,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Creates a session at the home view with nothing selected.
    pub fn new() -> Self {
        Self {
            selection: SelectionState::new(),
            current_view: View::HOME,
            history: NavigationHistory::new(),
        }
    }

    /// Returns the active view.
    pub fn current_view(&self) -> View {
        self.current_view
    }

    /// Returns the selected entry id, if any.
    pub fn selected_entry(&self) -> Option<EntryId> {
        self.selection.selected_entry()
    }

    /// Returns the focused panel, if any.
    pub fn focused_panel(&self) -> Option<Panel> {
        self.selection.focused_panel()
    }

    /// Returns whether a back affordance should be shown.
    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    /// Selects one entry in one panel.
    pub fn select_entry(&mut self, panel: Panel, id: EntryId) {
        self.selection.select(panel, id);
    }

    /// Cycles focus to the next panel. See [`SelectionState::cycle_focus`].
    pub fn cycle_focus(&mut self, items_for: impl Fn(Panel) -> Vec<EntryId>) {
        self.selection.cycle_focus(items_for);
    }

    /// Moves selection within the focused panel's ordered list.
    pub fn move_selection(&mut self, direction: Direction, items: &[EntryId]) {
        self.selection.move_selection(direction, items);
    }

    /// Reconciles selection after an external collection refresh.
    pub fn reconcile(&mut self, still_resolves: impl Fn(EntryId) -> bool) {
        self.selection.reconcile(still_resolves);
    }

    /// Navigates through an explicit go-to action.
    ///
    /// Pushes the previously active view onto the history stack, then
    /// switches. Going to the already-active view changes nothing.
    pub fn navigate_to(&mut self, view: View) {
        if view == self.current_view {
            return;
        }
        self.history.push(self.current_view);
        self.enter_view(view, "navigate_to");
    }

    /// Switches views passively (e.g. a sidebar destination).
    ///
    /// Does not participate in the history stack.
    pub fn switch_view(&mut self, view: View) {
        if view == self.current_view {
            return;
        }
        self.enter_view(view, "switch_view");
    }

    /// Navigates to home through its direct entry point.
    ///
    /// Clears the entire history stack unconditionally.
    pub fn go_home(&mut self) {
        self.history.clear();
        if self.current_view != View::HOME {
            self.enter_view(View::HOME, "go_home");
        }
    }

    /// Pops the most recent view and switches to it.
    ///
    /// No-op with an empty history; returns whether a switch happened.
    pub fn go_back(&mut self) -> bool {
        match self.history.pop() {
            Some(view) => {
                self.enter_view(view, "go_back");
                true
            }
            None => false,
        }
    }

    fn enter_view(&mut self, view: View, transition: &str) {
        debug!(
            "event=view_change module=session status=ok transition={transition} from={} to={view}",
            self.current_view
        );
        self.current_view = view;
        // A different view is a different selection context.
        self.selection.clear();
    }
}
