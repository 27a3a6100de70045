//! Cross-panel selection state.
//!
//! # Responsibility
//! - Track which entry is selected and which panel holds focus.
//! - Apply directional movement, focus cycling and refresh reconciliation.
//!
//! # Invariants
//! - At most one entry is selected system-wide; selecting in one panel
//!   atomically clears any selection owned by another panel.
//! - Directional movement clamps at list ends; it never wraps.
//! - A refresh clears selection only when the id no longer resolves.

use crate::model::entry::EntryId;
use log::debug;
use std::collections::HashMap;

/// Selectable interface regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// Main entry list.
    Primary,
    /// Side panel (e.g. pending tasks).
    Secondary,
}

impl Panel {
    /// Next panel in the fixed focus cycle.
    pub fn next(self) -> Panel {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Primary,
        }
    }
}

/// Direction for keyboard selection movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the end of the list.
    Next,
    /// Toward the start of the list.
    Previous,
}

/// Mutable selection state, one instance per process.
///
/// Panels also keep a per-panel cursor memory so focus cycling can restore
/// the last selected item of a panel; the cursor is memory, not selection,
/// and never violates the single-selection invariant.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: Option<EntryId>,
    focused_panel: Option<Panel>,
    cursors: HashMap<Panel, EntryId>,
}

impl SelectionState {
    /// Creates an empty selection state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected entry id, if any.
    pub fn selected_entry(&self) -> Option<EntryId> {
        self.selected
    }

    /// Returns the focused panel, if any.
    pub fn focused_panel(&self) -> Option<Panel> {
        self.focused_panel
    }

    /// Selects one entry in one panel.
    ///
    /// Replaces any prior selection wholesale, including one held by a
    /// different panel.
    pub fn select(&mut self, panel: Panel, id: EntryId) {
        self.selected = Some(id);
        self.focused_panel = Some(panel);
        self.cursors.insert(panel, id);
        debug!("event=select module=session status=ok panel={panel:?} entry={id}");
    }

    /// Clears selection and focus.
    pub fn clear(&mut self) {
        self.selected = None;
        self.focused_panel = None;
    }

    /// Moves focus to the next panel in the fixed cycle.
    ///
    /// `items_for` supplies the target panel's current ordered list. The
    /// target panel's remembered item is restored when it still resolves;
    /// otherwise its first item is selected. Panels with no items receive
    /// focus with no selection.
    pub fn cycle_focus(&mut self, items_for: impl Fn(Panel) -> Vec<EntryId>) {
        let target = self.focused_panel.map(Panel::next).unwrap_or(Panel::Primary);
        let items = items_for(target);
        let remembered = self
            .cursors
            .get(&target)
            .copied()
            .filter(|id| items.contains(id));
        match remembered.or_else(|| items.first().copied()) {
            Some(id) => self.select(target, id),
            None => {
                self.selected = None;
                self.focused_panel = Some(target);
            }
        }
    }

    /// Moves selection within the focused panel's ordered list.
    ///
    /// Clamped at both ends. With no focused panel this is a no-op; with a
    /// focused panel and no resolvable selection the first item is selected.
    pub fn move_selection(&mut self, direction: Direction, items: &[EntryId]) {
        let Some(panel) = self.focused_panel else {
            return;
        };
        if items.is_empty() {
            return;
        }

        let current = self
            .selected
            .and_then(|id| items.iter().position(|item| *item == id));
        let index = match (current, direction) {
            (None, _) => 0,
            (Some(at), Direction::Next) => (at + 1).min(items.len() - 1),
            (Some(at), Direction::Previous) => at.saturating_sub(1),
        };
        self.select(panel, items[index]);
    }

    /// Reconciles selection after an external data refresh.
    ///
    /// `still_resolves` reports whether an id exists in the refreshed
    /// collection for the still-focused panel. Selection survives variant
    /// changes; it is cleared only when the id no longer resolves.
    pub fn reconcile(&mut self, still_resolves: impl Fn(EntryId) -> bool) {
        if let Some(id) = self.selected {
            if !still_resolves(id) {
                debug!("event=selection_dropped module=session status=ok entry={id}");
                self.selected = None;
            }
        }
        self.cursors.retain(|_, id| still_resolves(*id));
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, Panel, SelectionState};
    use crate::model::entry::EntryId;
    use uuid::Uuid;

    fn ids(n: usize) -> Vec<EntryId> {
        (0..n).map(|_| Uuid::new_v4()).collect()
    }

    #[test]
    fn selecting_in_other_panel_clears_previous() {
        let primary = ids(2);
        let secondary = ids(1);
        let mut state = SelectionState::new();

        state.select(Panel::Primary, primary[0]);
        state.select(Panel::Secondary, secondary[0]);

        assert_eq!(state.selected_entry(), Some(secondary[0]));
        assert_eq!(state.focused_panel(), Some(Panel::Secondary));
    }

    #[test]
    fn movement_clamps_at_both_ends() {
        let items = ids(3);
        let mut state = SelectionState::new();
        state.select(Panel::Primary, items[0]);

        state.move_selection(Direction::Previous, &items);
        assert_eq!(state.selected_entry(), Some(items[0]));

        state.move_selection(Direction::Next, &items);
        state.move_selection(Direction::Next, &items);
        state.move_selection(Direction::Next, &items);
        assert_eq!(state.selected_entry(), Some(items[2]));
    }

    #[test]
    fn movement_without_focus_is_a_no_op() {
        let items = ids(2);
        let mut state = SelectionState::new();
        state.move_selection(Direction::Next, &items);
        assert_eq!(state.selected_entry(), None);
    }

    #[test]
    fn focus_cycle_restores_remembered_item() {
        let primary = ids(3);
        let secondary = ids(2);
        let mut state = SelectionState::new();

        state.select(Panel::Primary, primary[1]);
        let primary_items = primary.clone();
        let secondary_items = secondary.clone();
        let items_for = move |panel: Panel| match panel {
            Panel::Primary => primary_items.clone(),
            Panel::Secondary => secondary_items.clone(),
        };

        state.cycle_focus(&items_for);
        assert_eq!(state.focused_panel(), Some(Panel::Secondary));
        assert_eq!(state.selected_entry(), Some(secondary[0]));

        state.cycle_focus(&items_for);
        assert_eq!(state.focused_panel(), Some(Panel::Primary));
        assert_eq!(state.selected_entry(), Some(primary[1]));
    }

    #[test]
    fn reconcile_preserves_resolvable_selection() {
        let items = ids(2);
        let mut state = SelectionState::new();
        state.select(Panel::Primary, items[0]);

        let kept = items[0];
        state.reconcile(|id| id == kept);
        assert_eq!(state.selected_entry(), Some(items[0]));

        state.reconcile(|_| false);
        assert_eq!(state.selected_entry(), None);
    }
}
