//! Comment lineage paths as delivered by the platform API.
//!
//! The wire form is a dotted string with a leading `0` root marker, e.g.
//! `"0.15.27"` for comment 27 replying to comment 15. Internally the
//! marker is stripped and the lineage is kept as ids only, root-most
//! first, ending with the comment's own id.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommentPathError {
    #[error("empty comment path")]
    Empty,

    /// The wire form must start with the `0` root marker.
    #[error("comment path missing root marker: {0:?}")]
    MissingMarker(String),

    #[error("invalid segment {segment:?} in comment path {path:?}")]
    Segment { segment: String, path: String },
}

// ============================================================================
// CommentPath
// ============================================================================

/// Full lineage of a comment, root-most first, including the comment's
/// own id as the last element. The `0` wire marker is not stored.
///
/// An id sequence is all the tree builder needs: the immediate parent is
/// the second-to-last element, and a single-element path marks a root
/// reply. Lineages referencing ancestors missing from the current page
/// are legal; the builder promotes such comments to roots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentPath(Vec<i64>);

impl CommentPath {
    /// Lineage from raw ids, root-most first, own id last.
    pub fn new(ids: Vec<i64>) -> Self {
        Self(ids)
    }

    /// Lineage for a top-level comment.
    pub fn root(id: i64) -> Self {
        Self(vec![id])
    }

    /// Lineage for a direct reply under `parent`.
    pub fn child_of(parent: &CommentPath, id: i64) -> Self {
        let mut ids = parent.0.clone();
        ids.push(id);
        Self(ids)
    }

    /// All ids, root-most first.
    pub fn ids(&self) -> &[i64] {
        &self.0
    }

    /// The comment's own id (last element).
    pub fn own_id(&self) -> Option<i64> {
        self.0.last().copied()
    }

    /// Immediate parent id, or `None` for a top-level comment.
    pub fn parent_id(&self) -> Option<i64> {
        match self.0.len() {
            0 | 1 => None,
            n => Some(self.0[n - 2]),
        }
    }

    /// Nesting depth the lineage claims (0 for a top-level comment).
    ///
    /// The tree builder may place the node shallower when ancestors are
    /// missing from the page; this is the depth of the full lineage.
    pub fn claimed_depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn is_root(&self) -> bool {
        self.0.len() <= 1
    }
}

impl FromStr for CommentPath {
    type Err = CommentPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CommentPathError::Empty);
        }

        let mut segments = s.split('.');
        match segments.next() {
            Some("0") => {}
            _ => return Err(CommentPathError::MissingMarker(s.to_string())),
        }

        let mut ids = Vec::new();
        for segment in segments {
            let id: i64 = segment
                .parse()
                .map_err(|_| CommentPathError::Segment {
                    segment: segment.to_string(),
                    path: s.to_string(),
                })?;
            ids.push(id);
        }

        if ids.is_empty() {
            // A bare "0" names no comment at all.
            return Err(CommentPathError::Empty);
        }

        Ok(Self(ids))
    }
}

impl fmt::Display for CommentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0")?;
        for id in &self.0 {
            write!(f, ".{}", id)?;
        }
        Ok(())
    }
}

// Wire round-trip through the dotted string form.
impl Serialize for CommentPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CommentPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
