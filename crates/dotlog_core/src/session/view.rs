//! View vocabulary for navigation.

use std::fmt::{Display, Formatter};

/// Enumerable set of top-level views. `Day` is the designated home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Day journal view. The home view.
    Day,
    /// Weekly summary.
    Week,
    /// Monthly summary.
    Month,
    /// Search results.
    Search,
    /// Named lists.
    Lists,
}

impl View {
    /// The designated home view.
    pub const HOME: View = View::Day;

    /// Returns whether this is the home view.
    pub fn is_home(self) -> bool {
        self == Self::HOME
    }

    /// Returns the canonical token for this view.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Search => "search",
            Self::Lists => "lists",
        }
    }
}

impl Display for View {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
