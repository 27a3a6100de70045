//! Entry domain model.
//!
//! # Responsibility
//! - Define the canonical journal entry record shared by all components.
//! - Provide boundary parsing that rejects unknown variant/priority tokens.
//!
//! # Invariants
//! - `id` is stable and never reused for another entry.
//! - `parent_id` is a plain id reference; it is resolved against the owning
//!   flat collection at tree-build time, never stored as an object link.
//! - Adding a variant is a compile-visible change: every consumer matches
//!   exhaustively and there is no fallback arm for unknown variants.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Stable identifier for every journal entry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntryId = Uuid;

/// Closed category set for journal entries.
///
/// Derived states (`Done`, `Migrated`, `Cancelled`, `Answered`, `Answer`,
/// `MovedToList`) share the record shape with the base kinds; only the
/// variant tag changes when an entry transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryVariant {
    /// Actionable item awaiting completion.
    Task,
    /// Free-form text record.
    Note,
    /// Scheduled occurrence.
    Event,
    /// Completed task.
    Done,
    /// Task carried forward to another day.
    Migrated,
    /// Struck item no longer relevant.
    Cancelled,
    /// Open question awaiting an answer.
    Question,
    /// Question that has received its answer.
    Answered,
    /// The answer text attached to a question.
    Answer,
    /// Task moved into a named list.
    MovedToList,
}

impl EntryVariant {
    /// Returns the canonical wire token for this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Note => "note",
            Self::Event => "event",
            Self::Done => "done",
            Self::Migrated => "migrated",
            Self::Cancelled => "cancelled",
            Self::Question => "question",
            Self::Answered => "answered",
            Self::Answer => "answer",
            Self::MovedToList => "movedToList",
        }
    }

    /// Returns whether this variant toggles between done and not-done.
    pub fn is_toggleable(self) -> bool {
        match self {
            Self::Task | Self::Done => true,
            Self::Note
            | Self::Event
            | Self::Migrated
            | Self::Cancelled
            | Self::Question
            | Self::Answered
            | Self::Answer
            | Self::MovedToList => false,
        }
    }

    /// Returns whether this variant represents an unresolved item.
    ///
    /// Open variants are the only ones eligible for attention scoring and
    /// for the age-based `overdue`/`aging` indicators.
    pub fn is_open(self) -> bool {
        match self {
            Self::Task | Self::Question => true,
            Self::Note
            | Self::Event
            | Self::Done
            | Self::Migrated
            | Self::Cancelled
            | Self::Answered
            | Self::Answer
            | Self::MovedToList => false,
        }
    }
}

impl Display for EntryVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unknown variant tokens at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantParseError {
    /// Rejected raw token.
    pub token: String,
}

impl Display for VariantParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown entry variant `{}`", self.token)
    }
}

impl Error for VariantParseError {}

impl FromStr for EntryVariant {
    type Err = VariantParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "task" => Ok(Self::Task),
            "note" => Ok(Self::Note),
            "event" => Ok(Self::Event),
            "done" => Ok(Self::Done),
            "migrated" => Ok(Self::Migrated),
            "cancelled" => Ok(Self::Cancelled),
            "question" => Ok(Self::Question),
            "answered" => Ok(Self::Answered),
            "answer" => Ok(Self::Answer),
            "movedToList" => Ok(Self::MovedToList),
            other => Err(VariantParseError {
                token: other.to_string(),
            }),
        }
    }
}

/// Entry priority level, orthogonal to variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Priority {
    /// No explicit priority.
    None,
    /// Low priority.
    Low,
    /// Medium priority.
    Medium,
    /// High priority.
    High,
}

impl Priority {
    /// Returns the canonical wire token for this priority.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unknown priority tokens at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityParseError {
    /// Rejected raw token.
    pub token: String,
}

impl Display for PriorityParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown priority `{}`", self.token)
    }
}

impl Error for PriorityParseError {}

impl FromStr for Priority {
    type Err = PriorityParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "none" => Ok(Self::None),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(PriorityParseError {
                token: other.to_string(),
            }),
        }
    }
}

/// Canonical journal entry record.
///
/// The flat collection handed over by the entry store owns all entries;
/// trees, scores and applicability answers are derived, disposable views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Stable global ID, unique within a collection.
    pub id: EntryId,
    /// Closed entry category.
    pub variant: EntryVariant,
    /// Free text. May embed `#word` tag tokens highlighted downstream.
    pub content: String,
    /// Priority level, orthogonal to variant.
    pub priority: Priority,
    /// Parent entry id within the same collection. `None` means root-level.
    pub parent_id: Option<EntryId>,
    /// Creation timestamp in epoch milliseconds. Absent means age zero.
    pub created_at: Option<i64>,
}

impl Entry {
    /// Creates a new root-level entry with a generated stable ID.
    pub fn new(variant: EntryVariant, content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), variant, content)
    }

    /// Creates a new entry with a caller-provided stable ID.
    ///
    /// Used by store/import paths where identity already exists externally.
    pub fn with_id(id: EntryId, variant: EntryVariant, content: impl Into<String>) -> Self {
        Self {
            id,
            variant,
            content: content.into(),
            priority: Priority::None,
            parent_id: None,
            created_at: None,
        }
    }

    /// Returns whole days elapsed since creation, clamped to zero.
    ///
    /// Entries without a creation timestamp, and entries created after
    /// `now_ms`, report an age of zero days.
    pub fn age_in_days(&self, now_ms: i64) -> u32 {
        match self.created_at {
            Some(created_at) if created_at < now_ms => {
                ((now_ms - created_at) / MILLIS_PER_DAY) as u32
            }
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Entry, EntryVariant, Priority, MILLIS_PER_DAY};
    use std::str::FromStr;

    #[test]
    fn variant_tokens_round_trip() {
        for variant in [
            EntryVariant::Task,
            EntryVariant::Note,
            EntryVariant::Event,
            EntryVariant::Done,
            EntryVariant::Migrated,
            EntryVariant::Cancelled,
            EntryVariant::Question,
            EntryVariant::Answered,
            EntryVariant::Answer,
            EntryVariant::MovedToList,
        ] {
            let parsed = EntryVariant::from_str(variant.as_str()).expect("token should parse");
            assert_eq!(parsed, variant);
        }
    }

    #[test]
    fn unknown_variant_token_is_rejected() {
        let err = EntryVariant::from_str("reminder").expect_err("unknown token must fail");
        assert_eq!(err.token, "reminder");
    }

    #[test]
    fn unknown_priority_token_is_rejected() {
        let err = Priority::from_str("urgent").expect_err("unknown token must fail");
        assert_eq!(err.token, "urgent");
    }

    #[test]
    fn serde_uses_camel_case_tokens() {
        let mut entry = Entry::new(EntryVariant::MovedToList, "Groceries");
        entry.priority = Priority::High;

        let json = serde_json::to_string(&entry).expect("entry should serialize");
        assert!(json.contains("\"movedToList\""));
        assert!(json.contains("\"high\""));
        assert!(json.contains("\"parentId\""));

        let back: Entry = serde_json::from_str(&json).expect("entry should deserialize");
        assert_eq!(back, entry);
    }

    #[test]
    fn serde_rejects_unknown_variant() {
        let json = r#"{
            "id": "7f3c0d1e-8a7b-4a4e-9d57-2f6f0c9b1a55",
            "variant": "reminder",
            "content": "x",
            "priority": "none",
            "parentId": null,
            "createdAt": null
        }"#;
        assert!(serde_json::from_str::<Entry>(json).is_err());
    }

    #[test]
    fn age_defaults_to_zero_without_timestamp() {
        let entry = Entry::new(EntryVariant::Task, "No timestamp");
        assert_eq!(entry.age_in_days(1_000_000), 0);
    }

    #[test]
    fn age_counts_whole_days_and_clamps_future() {
        let now = 10 * MILLIS_PER_DAY;
        let mut entry = Entry::new(EntryVariant::Task, "Aged");
        entry.created_at = Some(3 * MILLIS_PER_DAY + MILLIS_PER_DAY / 2);
        assert_eq!(entry.age_in_days(now), 6);

        entry.created_at = Some(now + MILLIS_PER_DAY);
        assert_eq!(entry.age_in_days(now), 0);
    }

    #[test]
    fn open_and_toggleable_predicates() {
        assert!(EntryVariant::Task.is_open());
        assert!(EntryVariant::Question.is_open());
        assert!(!EntryVariant::Done.is_open());
        assert!(!EntryVariant::Note.is_open());

        assert!(EntryVariant::Task.is_toggleable());
        assert!(EntryVariant::Done.is_toggleable());
        assert!(!EntryVariant::Question.is_toggleable());
    }
}
