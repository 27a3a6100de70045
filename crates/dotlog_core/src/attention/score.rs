//! Attention score derivation.
//!
//! # Responsibility
//! - Compute the additive attention score and qualitative indicators for
//!   one entry against a reference time.
//!
//! # Invariants
//! - Every term is non-negative; the total never underflows.
//! - Non-open variants score zero but still receive indicators.
//! - Output is deterministic for the same `(entry, now, index)`.

use crate::model::entry::{Entry, EntryVariant, Priority};
use crate::tree::index::HierarchyIndex;
use std::collections::BTreeSet;

/// Priority bonus for `Priority::High`.
///
/// Large enough to outrank a moderately aged low-priority item; priority
/// is a first-order signal, not a tiebreak.
pub const HIGH_PRIORITY_BONUS: u32 = 20;
/// Priority bonus for `Priority::Medium`.
pub const MEDIUM_PRIORITY_BONUS: u32 = 8;
/// Priority bonus for `Priority::Low`.
pub const LOW_PRIORITY_BONUS: u32 = 2;
/// Score contributed per direct child awaiting resolution.
pub const CHILD_WEIGHT: u32 = 5;
/// Flat bonus for open questions.
pub const QUESTION_BONUS: u32 = 7;
/// Age in days at which an open entry starts to read as aging.
pub const AGING_THRESHOLD_DAYS: u32 = 3;
/// Age in days at which an open entry reads as overdue.
pub const OVERDUE_THRESHOLD_DAYS: u32 = 7;

/// Qualitative reason tag attached to a scored entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Indicator {
    /// Open entry past the overdue age threshold.
    Overdue,
    /// Entry carries medium or high priority.
    Priority,
    /// Open entry past the softer aging threshold, not yet overdue.
    Aging,
    /// Entry was migrated and is being re-surfaced.
    Migrated,
}

/// Derived, ephemeral attention result. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttentionScore {
    /// Additive non-negative score.
    pub score: u32,
    /// Distinct qualitative indicators for this entry.
    pub indicators: BTreeSet<Indicator>,
    /// Whole days since creation, clamped to zero.
    pub days_old: u32,
}

/// Scores one entry against a reference time and hierarchy facts.
///
/// Total over all variants: anything that is not an open `task`/`question`
/// yields a zero score. Callers exclude such entries from attention
/// surfaces upstream; the scorer itself never assumes a filtered input.
pub fn score(entry: &Entry, now_ms: i64, index: &HierarchyIndex) -> AttentionScore {
    let days_old = entry.age_in_days(now_ms);
    let indicators = indicators(entry, days_old);

    if !entry.variant.is_open() {
        return AttentionScore {
            score: 0,
            indicators,
            days_old,
        };
    }

    let age_term = days_old;
    let priority_term = priority_bonus(entry.priority);
    let complexity_term = index.child_count(entry.id) as u32 * CHILD_WEIGHT;
    let type_term = match entry.variant {
        EntryVariant::Question => QUESTION_BONUS,
        _ => 0,
    };

    AttentionScore {
        score: age_term + priority_term + complexity_term + type_term,
        indicators,
        days_old,
    }
}

/// Returns the fixed bonus for a priority level.
pub fn priority_bonus(priority: Priority) -> u32 {
    match priority {
        Priority::None => 0,
        Priority::Low => LOW_PRIORITY_BONUS,
        Priority::Medium => MEDIUM_PRIORITY_BONUS,
        Priority::High => HIGH_PRIORITY_BONUS,
    }
}

fn indicators(entry: &Entry, days_old: u32) -> BTreeSet<Indicator> {
    let mut set = BTreeSet::new();
    if entry.variant.is_open() && days_old >= OVERDUE_THRESHOLD_DAYS {
        set.insert(Indicator::Overdue);
    } else if entry.variant.is_open() && days_old >= AGING_THRESHOLD_DAYS {
        set.insert(Indicator::Aging);
    }
    if matches!(entry.priority, Priority::Medium | Priority::High) {
        set.insert(Indicator::Priority);
    }
    if entry.variant == EntryVariant::Migrated {
        set.insert(Indicator::Migrated);
    }
    set
}
