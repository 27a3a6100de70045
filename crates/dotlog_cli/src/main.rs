//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `dotlog_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use dotlog_core::{filter_and_cap, rank, Entry, EntryVariant, Priority};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

fn main() {
    println!("dotlog_core version={}", dotlog_core::core_version());

    // Tiny fixed collection exercising the rank/cap pipeline end to end.
    let mut overdue = Entry::new(EntryVariant::Task, "Renew passport");
    overdue.created_at = Some(0);
    let mut urgent = Entry::new(EntryVariant::Task, "Send invoice");
    urgent.created_at = Some(10 * DAY_MS);
    urgent.priority = Priority::High;
    let mut question = Entry::new(EntryVariant::Question, "Which ISP?");
    question.created_at = Some(8 * DAY_MS);

    let now = 12 * DAY_MS;
    let ranked = rank(&[overdue, urgent, question], now);
    let page = filter_and_cap(
        &ranked,
        now,
        dotlog_core::DEFAULT_MIN_SCORE,
        dotlog_core::DEFAULT_MAX_VISIBLE,
    );
    for entry in &page.shown {
        println!("attention: {} [{}]", entry.content, entry.variant);
    }
    println!("truncated={}", page.truncated);
}
