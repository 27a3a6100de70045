//! Declarative action applicability registry.
//!
//! # Responsibility
//! - Hold one predicate per action type, evaluated purely from the entry
//!   and optional context.
//! - Answer bar/menu queries in their fixed presentation orders.
//!
//! # Invariants
//! - Every variant-sensitive predicate is an exhaustive match; adding a
//!   variant is a compile-visible change here.
//! - `cancel` and `uncancel` are mutually exclusive and jointly exhaustive
//!   over cancellable-ness.
//! - Bar/menu orders are static arrays, never computed from predicates.

use crate::model::entry::{Entry, EntryVariant};
use once_cell::sync::Lazy;
use std::fmt::{Display, Formatter};

/// Closed set of user-invocable operations on an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    /// Attach an answer to a question.
    Answer,
    /// Strike the entry.
    Cancel,
    /// Restore a struck entry.
    Uncancel,
    /// Step priority none -> low -> medium -> high -> none.
    CyclePriority,
    /// Step the base variant task -> note -> event -> question.
    CycleType,
    /// Carry a task forward to another day.
    Migrate,
    /// Edit entry content.
    Edit,
    /// Remove the entry.
    Delete,
    /// Create a child under the entry.
    AddChild,
    /// Detach the entry from its parent.
    MoveToRoot,
    /// Move a task into a named list.
    MoveToList,
}

impl ActionType {
    /// Returns the canonical token for this action.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Answer => "answer",
            Self::Cancel => "cancel",
            Self::Uncancel => "uncancel",
            Self::CyclePriority => "cyclePriority",
            Self::CycleType => "cycleType",
            Self::Migrate => "migrate",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::AddChild => "addChild",
            Self::MoveToRoot => "moveToRoot",
            Self::MoveToList => "moveToList",
        }
    }
}

impl Display for ActionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hierarchy-derived context for applicability checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionContext {
    /// Whether the entry resolved to a non-root tree position.
    pub has_parent: bool,
}

/// One row of the fixed registry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDefinition {
    /// The operation this row gates.
    pub action: ActionType,
    /// Eligible for the compact bar surface.
    pub show_in_bar: bool,
    /// Eligible for the full menu surface.
    pub show_in_menu: bool,
}

impl ActionDefinition {
    /// Evaluates this row's predicate for an entry and optional context.
    pub fn applies_to(&self, entry: &Entry, context: Option<&ActionContext>) -> bool {
        is_applicable(self.action, entry, context)
    }
}

/// Compact-bar presentation order for space-constrained surfaces.
///
/// Carries both `cancel` and `uncancel`; their predicates partition the
/// variants, so at most one of the pair occupies a bar slot at a time.
pub const BAR_ORDER: [ActionType; 8] = [
    ActionType::Answer,
    ActionType::CyclePriority,
    ActionType::CycleType,
    ActionType::Migrate,
    ActionType::Edit,
    ActionType::Cancel,
    ActionType::Uncancel,
    ActionType::Delete,
];

/// Full-menu presentation order, destructive operations last.
pub const MENU_ORDER: [ActionType; 11] = [
    ActionType::Answer,
    ActionType::Edit,
    ActionType::CyclePriority,
    ActionType::CycleType,
    ActionType::Migrate,
    ActionType::AddChild,
    ActionType::MoveToRoot,
    ActionType::MoveToList,
    ActionType::Cancel,
    ActionType::Uncancel,
    ActionType::Delete,
];

static REGISTRY: Lazy<[ActionDefinition; MENU_ORDER.len()]> = Lazy::new(|| {
    MENU_ORDER.map(|action| ActionDefinition {
        action,
        show_in_bar: BAR_ORDER.contains(&action),
        show_in_menu: true,
    })
});

/// Returns each action's fixed row position, mirroring `MENU_ORDER`.
///
/// An exhaustive match so a new action type cannot compile without a
/// registry slot.
fn registry_slot(action: ActionType) -> usize {
    match action {
        ActionType::Answer => 0,
        ActionType::Edit => 1,
        ActionType::CyclePriority => 2,
        ActionType::CycleType => 3,
        ActionType::Migrate => 4,
        ActionType::AddChild => 5,
        ActionType::MoveToRoot => 6,
        ActionType::MoveToList => 7,
        ActionType::Cancel => 8,
        ActionType::Uncancel => 9,
        ActionType::Delete => 10,
    }
}

/// Looks up the fixed definition row for an action.
pub fn definition(action: ActionType) -> &'static ActionDefinition {
    &REGISTRY[registry_slot(action)]
}

/// Evaluates one action's applicability predicate.
///
/// Pure over `(entry.variant, entry.priority, context.has_parent)`.
/// A missing context is read as `has_parent = false`.
pub fn is_applicable(action: ActionType, entry: &Entry, context: Option<&ActionContext>) -> bool {
    match action {
        ActionType::Answer => match entry.variant {
            EntryVariant::Question => true,
            EntryVariant::Task
            | EntryVariant::Note
            | EntryVariant::Event
            | EntryVariant::Done
            | EntryVariant::Migrated
            | EntryVariant::Cancelled
            | EntryVariant::Answered
            | EntryVariant::Answer
            | EntryVariant::MovedToList => false,
        },
        ActionType::Cancel => match entry.variant {
            EntryVariant::Cancelled => false,
            EntryVariant::Task
            | EntryVariant::Note
            | EntryVariant::Event
            | EntryVariant::Done
            | EntryVariant::Migrated
            | EntryVariant::Question
            | EntryVariant::Answered
            | EntryVariant::Answer
            | EntryVariant::MovedToList => true,
        },
        ActionType::Uncancel => match entry.variant {
            EntryVariant::Cancelled => true,
            EntryVariant::Task
            | EntryVariant::Note
            | EntryVariant::Event
            | EntryVariant::Done
            | EntryVariant::Migrated
            | EntryVariant::Question
            | EntryVariant::Answered
            | EntryVariant::Answer
            | EntryVariant::MovedToList => false,
        },
        ActionType::CyclePriority => true,
        ActionType::CycleType => match entry.variant {
            EntryVariant::Task
            | EntryVariant::Note
            | EntryVariant::Event
            | EntryVariant::Question => true,
            EntryVariant::Done
            | EntryVariant::Migrated
            | EntryVariant::Cancelled
            | EntryVariant::Answered
            | EntryVariant::Answer
            | EntryVariant::MovedToList => false,
        },
        ActionType::Migrate => match entry.variant {
            EntryVariant::Task => true,
            EntryVariant::Note
            | EntryVariant::Event
            | EntryVariant::Done
            | EntryVariant::Migrated
            | EntryVariant::Cancelled
            | EntryVariant::Question
            | EntryVariant::Answered
            | EntryVariant::Answer
            | EntryVariant::MovedToList => false,
        },
        ActionType::Edit => match entry.variant {
            EntryVariant::Cancelled => false,
            EntryVariant::Task
            | EntryVariant::Note
            | EntryVariant::Event
            | EntryVariant::Done
            | EntryVariant::Migrated
            | EntryVariant::Question
            | EntryVariant::Answered
            | EntryVariant::Answer
            | EntryVariant::MovedToList => true,
        },
        ActionType::Delete => true,
        ActionType::AddChild => match entry.variant {
            EntryVariant::Question => false,
            EntryVariant::Task
            | EntryVariant::Note
            | EntryVariant::Event
            | EntryVariant::Done
            | EntryVariant::Migrated
            | EntryVariant::Cancelled
            | EntryVariant::Answered
            | EntryVariant::Answer
            | EntryVariant::MovedToList => true,
        },
        ActionType::MoveToRoot => context.map(|ctx| ctx.has_parent).unwrap_or(false),
        ActionType::MoveToList => match entry.variant {
            EntryVariant::Task => true,
            EntryVariant::Note
            | EntryVariant::Event
            | EntryVariant::Done
            | EntryVariant::Migrated
            | EntryVariant::Cancelled
            | EntryVariant::Question
            | EntryVariant::Answered
            | EntryVariant::Answer
            | EntryVariant::MovedToList => false,
        },
    }
}

/// Returns applicable compact-bar rows in bar order.
pub fn applicable_bar_actions(
    entry: &Entry,
    context: Option<&ActionContext>,
) -> Vec<&'static ActionDefinition> {
    applicable_in(&BAR_ORDER, |def| def.show_in_bar, entry, context)
}

/// Returns applicable full-menu rows in menu order.
pub fn applicable_menu_actions(
    entry: &Entry,
    context: Option<&ActionContext>,
) -> Vec<&'static ActionDefinition> {
    applicable_in(&MENU_ORDER, |def| def.show_in_menu, entry, context)
}

fn applicable_in(
    order: &[ActionType],
    surface: impl Fn(&ActionDefinition) -> bool,
    entry: &Entry,
    context: Option<&ActionContext>,
) -> Vec<&'static ActionDefinition> {
    order
        .iter()
        .map(|action| definition(*action))
        .filter(|def| surface(def))
        .filter(|def| def.applies_to(entry, context))
        .collect()
}

/// Debug-asserts that an action is applicable before dispatch.
///
/// Invoking an inapplicable action directly is a programming error; this
/// fails loudly in development builds instead of silently no-opping.
pub fn assert_applicable(action: ActionType, entry: &Entry, context: Option<&ActionContext>) {
    debug_assert!(
        is_applicable(action, entry, context),
        "action `{action}` is not applicable to variant `{}`",
        entry.variant
    );
}

/// Narrows an applicable list to the actions the caller wired a handler for.
///
/// Actions without a supplied handler are never shown, even when otherwise
/// applicable; that narrowing belongs to the caller, and this helper only
/// expresses it over a registry result.
pub fn narrow_to_handled(
    applicable: Vec<&'static ActionDefinition>,
    has_handler: impl Fn(ActionType) -> bool,
) -> Vec<&'static ActionDefinition> {
    applicable
        .into_iter()
        .filter(|def| has_handler(def.action))
        .collect()
}
