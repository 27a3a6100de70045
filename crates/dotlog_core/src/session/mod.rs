//! Selection and navigation state machine.
//!
//! # Responsibility
//! - Own the single cross-surface selection invariant.
//! - Track the active view and the back-navigable view history.
//! - Provide pending-panel snapshot damping.
//!
//! # Invariants
//! - At most one entry is selected across all panels at any time.
//! - Every user input produces exactly one coherent state transition.
//! - Only explicit go-to navigation pushes history; home clears it.

pub mod machine;
pub mod navigation;
pub mod panel;
pub mod selection;
pub mod view;
