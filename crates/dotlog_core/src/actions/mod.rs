//! Action applicability rules.
//!
//! # Responsibility
//! - Decide which user operations are legal for an entry in a context.
//! - Keep compact-bar and full-menu presentation orders in one place.
//!
//! # Invariants
//! - The registry table is fixed at process start and never mutated.
//! - Predicates are pure over `(variant, priority, has_parent)`.
//! - Registry output is a strict superset that callers narrow by supplied
//!   handlers; the registry never knows about handlers.

pub mod registry;
