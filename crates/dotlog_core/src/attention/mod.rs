//! Attention ranking for open journal items.
//!
//! # Responsibility
//! - Score entries by how urgently they deserve review.
//! - Provide stable ranking plus threshold/cap policy for compact surfaces.
//!
//! # Invariants
//! - Scoring is a pure function of `(entry, now, hierarchy facts)`.
//! - Only open variants (`task`, `question`) score above zero; the scorer
//!   stays total over every variant.
//! - Ranking is stable: equal scores keep input order.

pub mod rank;
pub mod score;
