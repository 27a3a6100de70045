//! External entry store boundary contract.
//!
//! # Responsibility
//! - Name the read/command surface this subsystem consumes.
//! - Keep this crate free of persistence details; implementations live in
//!   the hosting application.
//!
//! # Invariants
//! - Commands are fire-and-forget from this subsystem's perspective; the
//!   caller re-lists entries afterwards and re-enters the derive pipeline.
//! - This subsystem never mutates an `Entry` in place.

use crate::model::entry::{Entry, EntryId, EntryVariant};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by entry store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced across the store boundary.
#[derive(Debug)]
pub enum StoreError {
    /// Command target does not exist.
    NotFound(EntryId),
    /// Store refused the command (validation, illegal transition).
    Rejected(String),
    /// Underlying backend failure, opaque to this subsystem.
    Backend(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "entry not found: {id}"),
            Self::Rejected(reason) => write!(f, "command rejected: {reason}"),
            Self::Backend(message) => write!(f, "store backend error: {message}"),
        }
    }
}

impl Error for StoreError {}

/// One logical collection scope handed to `list_entries`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// All entries of one day, keyed by whole days since the epoch.
    Day { epoch_day: i64 },
    /// Entries matching a free-text query.
    Search { query: String },
    /// The server-computed overdue/pending set.
    Overdue,
    /// The ancestor chain of one entry, root to leaf.
    AncestorPath { entry_id: EntryId },
}

/// Commands issued to the store, each identified by an entry id.
///
/// Success carries no payload; the caller follows up with `list_entries`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new entry.
    Create {
        variant: EntryVariant,
        content: String,
        parent_id: Option<EntryId>,
    },
    /// Replace entry content.
    Edit { id: EntryId, content: String },
    /// Remove an entry.
    Delete { id: EntryId },
    /// Mark a task done.
    MarkDone { id: EntryId },
    /// Revert a done task to open.
    MarkUndone { id: EntryId },
    /// Strike an entry.
    Cancel { id: EntryId },
    /// Restore a struck entry.
    Uncancel { id: EntryId },
    /// Step the priority level.
    CyclePriority { id: EntryId },
    /// Step the base variant.
    CycleType { id: EntryId },
    /// Carry a task to another day.
    Migrate { id: EntryId, target_epoch_day: i64 },
    /// Detach an entry from its parent.
    MoveToRoot { id: EntryId },
    /// Move a task into a named list.
    MoveToList { id: EntryId, list: String },
    /// Attach an answer to a question.
    Answer { id: EntryId, content: String },
}

/// Contract for the canonical entry store.
///
/// Mirrors the repository-trait seam used elsewhere in this crate family:
/// the trait lives with the consumer, implementations live with storage.
pub trait EntryStore {
    /// Returns the current flat collection for one scope.
    fn list_entries(&self, scope: &Scope) -> StoreResult<Vec<Entry>>;
    /// Submits one command for asynchronous application.
    fn submit(&mut self, command: Command) -> StoreResult<()>;
}
