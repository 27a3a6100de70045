//! Ranking, threshold and cap policy for attention surfaces.
//!
//! # Responsibility
//! - Order a collection by descending attention score.
//! - Apply the minimum-score threshold and visible-count cap, reporting
//!   truncation so callers can offer a "show all" escape.
//!
//! # Invariants
//! - Sort is stable; equal scores keep input order.
//! - `filter_and_cap` never reorders; it only narrows an already-ranked list.

use crate::attention::score::score;
use crate::model::entry::Entry;
use crate::tree::index::HierarchyIndex;
use log::debug;

/// Minimum score an entry needs to appear on an attention surface.
pub const DEFAULT_MIN_SCORE: u32 = 10;
/// Maximum entries shown before the surface truncates.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// Narrowed attention page plus the truncation fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPage {
    /// Entries that passed the threshold, capped to the visible maximum.
    pub shown: Vec<Entry>,
    /// True when qualifying entries were cut by the cap.
    pub truncated: bool,
}

/// Ranks a collection by descending attention score.
///
/// Child counts for the complexity term are derived from the same
/// collection. The sort is stable: peers with equal scores retain their
/// relative input order.
pub fn rank(entries: &[Entry], now_ms: i64) -> Vec<Entry> {
    let index = HierarchyIndex::new(entries);
    let mut ranked: Vec<Entry> = entries.to_vec();
    ranked.sort_by_key(|entry| std::cmp::Reverse(score(entry, now_ms, &index).score));
    debug!(
        "event=attention_rank module=attention status=ok input={}",
        entries.len()
    );
    ranked
}

/// Applies the minimum-score threshold and visible cap to a ranked list.
///
/// `ranked` is expected to be the output of [`rank`] over one collection;
/// scores are recomputed against that same collection so the threshold sees
/// identical child counts.
pub fn filter_and_cap(
    ranked: &[Entry],
    now_ms: i64,
    min_score: u32,
    max_count: usize,
) -> RankedPage {
    let index = HierarchyIndex::new(ranked);
    let qualifying: Vec<&Entry> = ranked
        .iter()
        .filter(|entry| score(entry, now_ms, &index).score >= min_score)
        .collect();
    let truncated = qualifying.len() > max_count;
    let shown = qualifying
        .into_iter()
        .take(max_count)
        .cloned()
        .collect();
    RankedPage { shown, truncated }
}

#[cfg(test)]
mod tests {
    use super::{filter_and_cap, rank, DEFAULT_MAX_VISIBLE, DEFAULT_MIN_SCORE};
    use crate::model::entry::{Entry, EntryVariant, Priority};

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;

    fn task_aged(days: i64, label: &str) -> Entry {
        let mut entry = Entry::new(EntryVariant::Task, label);
        entry.created_at = Some(-days * DAY_MS);
        entry
    }

    #[test]
    fn ranks_by_descending_score() {
        let old = task_aged(12, "old");
        let young = task_aged(1, "young");
        let mut urgent = task_aged(1, "urgent");
        urgent.priority = Priority::High;

        let ranked = rank(&[young.clone(), old.clone(), urgent.clone()], 0);
        let ids: Vec<_> = ranked.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![urgent.id, old.id, young.id]);
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let first = task_aged(4, "first");
        let second = task_aged(4, "second");
        let third = task_aged(4, "third");

        let ranked = rank(&[first.clone(), second.clone(), third.clone()], 0);
        let ids: Vec<_> = ranked.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![first.id, second.id, third.id]);
    }

    #[test]
    fn cap_truncates_and_reports() {
        let entries: Vec<Entry> = (0..10)
            .map(|n| task_aged(20 + n, &format!("t{n}")))
            .collect();
        let ranked = rank(&entries, 0);

        let page = filter_and_cap(&ranked, 0, DEFAULT_MIN_SCORE, DEFAULT_MAX_VISIBLE);
        assert_eq!(page.shown.len(), DEFAULT_MAX_VISIBLE);
        assert!(page.truncated);
        // Top five by rank, not an arbitrary five.
        for (shown, expected) in page.shown.iter().zip(ranked.iter()) {
            assert_eq!(shown.id, expected.id);
        }
    }

    #[test]
    fn small_qualifying_set_is_not_truncated() {
        let entries: Vec<Entry> = (0..3).map(|n| task_aged(15, &format!("t{n}"))).collect();
        let ranked = rank(&entries, 0);

        let page = filter_and_cap(&ranked, 0, DEFAULT_MIN_SCORE, DEFAULT_MAX_VISIBLE);
        assert_eq!(page.shown.len(), 3);
        assert!(!page.truncated);
    }

    #[test]
    fn threshold_excludes_low_signal_entries() {
        let quiet = task_aged(1, "quiet");
        let loud = task_aged(30, "loud");
        let ranked = rank(&[quiet.clone(), loud.clone()], 0);

        let page = filter_and_cap(&ranked, 0, DEFAULT_MIN_SCORE, DEFAULT_MAX_VISIBLE);
        assert_eq!(page.shown.len(), 1);
        assert_eq!(page.shown[0].id, loud.id);
        assert!(!page.truncated);
    }
}
