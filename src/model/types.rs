use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::CommentPath;

// ============================================================================
// Creator Reference
// ============================================================================

/// Minimal reference to a comment's author.
///
/// `instance` is the author's home instance, set when the author is
/// federated in from elsewhere; local authors leave it `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub instance: Option<String>,
}

impl PersonRef {
    /// Handle as shown to the viewer: `name` or `name@instance`.
    pub fn handle(&self) -> String {
        match &self.instance {
            Some(instance) => format!("{}@{}", self.name, instance),
            None => self.name.clone(),
        }
    }
}

// ============================================================================
// Aggregated Counts
// ============================================================================

/// Server-side aggregates for one comment.
///
/// `child_count` counts all descendants, fetched or not. Together with a
/// node's (possibly empty) local child list it distinguishes "children not
/// fetched yet" from "known leaf".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentCounts {
    pub score: i64,
    pub upvotes: i64,
    pub downvotes: i64,
    #[serde(default)]
    pub child_count: i64,
}

// ============================================================================
// Comment Record
// ============================================================================

/// One comment as delivered by the remote API, flattened to the fields
/// this crate consumes. Immutable once delivered; a refreshed copy of the
/// same id replaces the old one wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub id: i64,
    /// Full lineage including `id` itself; see [`CommentPath`].
    pub path: CommentPath,
    pub content: String,
    #[serde(default)]
    pub removed: bool,
    #[serde(default)]
    pub deleted: bool,
    pub counts: CommentCounts,
    /// The viewer's own vote: `1`, `-1`, or absent for no vote.
    #[serde(default)]
    pub my_vote: Option<i8>,
    pub creator: PersonRef,
    pub published: DateTime<Utc>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
}

impl CommentRecord {
    /// Immediate parent id per the lineage, or `None` for a top-level
    /// comment. The parent may still be absent from the current page.
    pub fn parent_id(&self) -> Option<i64> {
        self.path.parent_id()
    }
}

// ============================================================================
// Comment Sort
// ============================================================================

/// Sort orders the platform offers for comment listings.
///
/// Ordering is applied server-side; this crate never re-sorts a delivered
/// list. The active sort is carried so the caller can parameterize
/// fetches with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentSortType {
    Hot,
    Top,
    New,
    Old,
}

impl CommentSortType {
    /// Parse a sort name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hot" => Some(Self::Hot),
            "top" => Some(Self::Top),
            "new" => Some(Self::New),
            "old" => Some(Self::Old),
            _ => None,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hot => "Hot",
            Self::Top => "Top",
            Self::New => "New",
            Self::Old => "Old",
        }
    }
}

impl Default for CommentSortType {
    fn default() -> Self {
        Self::Hot
    }
}
