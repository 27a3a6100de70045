//! Entry hierarchy derivation.
//!
//! # Responsibility
//! - Turn the flat entry collection into rooted trees via parent references.
//! - Expose hierarchy facts (children, depth, ancestry) for scoring and
//!   applicability context.
//!
//! # Invariants
//! - Orphaned, self-referencing and cyclic parent links never fail; the
//!   affected entry is rooted instead.
//! - Every input entry appears in the derived forest exactly once.
//! - Sibling order follows input collection order.

pub mod builder;
pub mod index;
