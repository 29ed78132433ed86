//! Optimistic vote state for comments.
//!
//! Pressing a vote button must move the visible score immediately, before
//! the server confirms. [`InstantScores`] is that optimistic snapshot:
//! applied as an overlay on top of the delivered record and discarded once
//! a fresh fetch supersedes it. Votes toggle: pressing the same direction
//! again retracts the vote, pressing the opposite direction flips it.

use serde::{Deserialize, Serialize};

use crate::model::CommentRecord;

// ============================================================================
// Vote Action
// ============================================================================

/// A vote button press. What it does depends on the current vote:
/// same direction retracts, opposite direction flips, neutral sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteAction {
    Upvote,
    Downvote,
}

// ============================================================================
// Vote Intent
// ============================================================================

/// The request the caller forwards to the network collaborator after an
/// optimistic apply. `vote` is the resulting state (`1`, `-1`, or `0` for
/// retraction), not the delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteIntent {
    pub comment_id: i64,
    pub vote: i8,
}

// ============================================================================
// Instant Scores
// ============================================================================

/// Optimistic per-comment vote snapshot: the viewer's vote plus the three
/// counters it influences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantScores {
    pub my_vote: Option<i8>,
    pub score: i64,
    pub upvotes: i64,
    pub downvotes: i64,
}

impl InstantScores {
    /// Snapshot the server-confirmed state of a record.
    pub fn from_record(record: &CommentRecord) -> Self {
        Self {
            my_vote: record.my_vote,
            score: record.counts.score,
            upvotes: record.counts.upvotes,
            downvotes: record.counts.downvotes,
        }
    }

    /// Apply one button press and return the new snapshot.
    ///
    /// Transition table (score delta / counter moves):
    ///
    /// | from     | upvote            | downvote          |
    /// |----------|-------------------|-------------------|
    /// | no vote  | +1, up+1          | -1, down+1        |
    /// | upvote   | -1, up-1 (retract)| -2, up-1, down+1  |
    /// | downvote | +2, up+1, down-1  | +1, down-1 (retract) |
    pub fn apply(self, action: VoteAction) -> Self {
        let current = self.my_vote.unwrap_or(0);
        let (new_vote, d_score, d_up, d_down) = match (action, current) {
            (VoteAction::Upvote, 1) => (0, -1, -1, 0),
            (VoteAction::Upvote, -1) => (1, 2, 1, -1),
            (VoteAction::Upvote, _) => (1, 1, 1, 0),
            (VoteAction::Downvote, -1) => (0, 1, 0, -1),
            (VoteAction::Downvote, 1) => (-1, -2, -1, 1),
            (VoteAction::Downvote, _) => (-1, -1, 0, 1),
        };

        Self {
            my_vote: (new_vote != 0).then_some(new_vote),
            score: self.score + d_score,
            upvotes: self.upvotes + d_up,
            downvotes: self.downvotes + d_down,
        }
    }

    /// The wire value for the current state: `1`, `-1`, or `0` for no vote.
    pub fn vote_value(&self) -> i8 {
        self.my_vote.unwrap_or(0)
    }
}
