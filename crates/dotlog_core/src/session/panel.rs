//! Pending-panel snapshot damping.
//!
//! # Responsibility
//! - Freeze a pending-items panel's contents at expand time.
//!
//! # Invariants
//! - Status changes to snapshotted items never remove them from the
//!   visible list; only collapse followed by re-expand takes a fresh
//!   snapshot.
//! - A collapsed panel exposes no items.

use crate::model::entry::EntryId;

/// Snapshot-backed contents of a pending-items panel.
///
/// The panel deliberately ignores live status changes while expanded so a
/// just-completed task does not vanish mid-interaction.
#[derive(Debug, Clone, Default)]
pub struct PendingSnapshot {
    items: Vec<EntryId>,
    expanded: bool,
}

impl PendingSnapshot {
    /// Creates a collapsed, empty panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expands the panel, snapshotting the current pending collection.
    pub fn expand(&mut self, current_pending: &[EntryId]) {
        self.items = current_pending.to_vec();
        self.expanded = true;
    }

    /// Collapses the panel and discards the snapshot.
    pub fn collapse(&mut self) {
        self.items.clear();
        self.expanded = false;
    }

    /// Returns whether the panel is expanded.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Returns the snapshotted item ids, in snapshot order.
    ///
    /// Empty while collapsed.
    pub fn items(&self) -> &[EntryId] {
        &self.items
    }
}
