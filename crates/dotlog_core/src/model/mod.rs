//! Unified domain model for journal entries.
//!
//! # Responsibility
//! - Define canonical data structures used by every core component.
//! - Keep one entry-centric shape shared by tree, scoring and action logic.
//!
//! # Invariants
//! - Every domain object is identified by a stable `EntryId`.
//! - `EntryVariant` and `Priority` are closed sets; unknown tokens are
//!   rejected at the boundary, never mapped onto a known value.

pub mod entry;
pub mod tags;
