//! Interaction and domain-state engine for the dotlog bullet journal.
//! This crate is the single source of truth for hierarchy derivation,
//! attention ranking, action applicability and selection/navigation state.

pub mod actions;
pub mod attention;
pub mod logging;
pub mod model;
pub mod session;
pub mod store;
pub mod tree;

pub use actions::registry::{
    applicable_bar_actions, applicable_menu_actions, assert_applicable, is_applicable,
    narrow_to_handled, ActionContext, ActionDefinition, ActionType, BAR_ORDER, MENU_ORDER,
};
pub use attention::rank::{filter_and_cap, rank, RankedPage, DEFAULT_MAX_VISIBLE, DEFAULT_MIN_SCORE};
pub use attention::score::{score, AttentionScore, Indicator};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{
    Entry, EntryId, EntryVariant, Priority, PriorityParseError, VariantParseError,
};
pub use model::tags::extract_tags;
pub use session::machine::SessionState;
pub use session::navigation::NavigationHistory;
pub use session::panel::PendingSnapshot;
pub use session::selection::{Direction, Panel, SelectionState};
pub use session::view::View;
pub use store::{Command, EntryStore, Scope, StoreError, StoreResult};
pub use tree::builder::{build_tree, flatten, TreeNode};
pub use tree::index::HierarchyIndex;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
