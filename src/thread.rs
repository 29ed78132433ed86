//! Per-discussion state: the flat list, the rebuilt forest, expansion,
//! and optimistic votes, behind one synchronous type.
//!
//! `ThreadState` is the piece the host application owns while one
//! discussion is on screen. It never talks to the network itself: fetch
//! results are pushed in via [`ThreadState::replace`] and
//! [`ThreadState::merge_page`], and outgoing work is returned as request
//! values ([`FetchChildren`], [`VoteIntent`]) for the caller to forward.
//! Everything runs on the caller's thread; a rebuild is a pure function
//! of the flat list plus the flat-mode flag.

use std::collections::HashMap;

use crate::expand::{self, ExpansionState, FetchChildren};
use crate::model::{CommentRecord, CommentSortType};
use crate::options::ViewOptions;
use crate::tree::{CommentTree, ThreadRow};
use crate::vote::{InstantScores, VoteAction, VoteIntent};

// ============================================================================
// Thread State
// ============================================================================

/// State for one viewed discussion. Dropping it is how "navigating away"
/// clears expansion and optimistic-vote state.
#[derive(Debug, Clone)]
pub struct ThreadState {
    /// Comments exactly as delivered, first delivery first. Never
    /// re-sorted locally.
    records: Vec<CommentRecord>,
    /// Forest derived from `records`; rebuilt wholesale on every change.
    tree: CommentTree,
    expansion: ExpansionState,
    /// Optimistic vote snapshots by comment id, discarded as refreshed
    /// records arrive.
    overlays: HashMap<i64, InstantScores>,
    options: ViewOptions,
    sort: CommentSortType,
    /// Visible rows, invalidated by any mutation that changes them.
    cached_rows: Option<Vec<ThreadRow>>,
}

impl ThreadState {
    pub fn new(options: ViewOptions) -> Self {
        let sort = options.default_sort;
        Self {
            records: Vec::new(),
            tree: CommentTree::empty(),
            expansion: ExpansionState::new(),
            overlays: HashMap::new(),
            options,
            sort,
            cached_rows: None,
        }
    }

    // ========================================================================
    // Fetched Data
    // ========================================================================

    /// Install a fresh full fetch of the discussion.
    ///
    /// This is the reconcile point for optimistic state: the server's
    /// answer supersedes every pending vote overlay. Expansion state is
    /// kept: it is keyed by id and ids are stable across refreshes.
    pub fn replace(&mut self, records: Vec<CommentRecord>) {
        if !self.overlays.is_empty() {
            tracing::debug!(
                discarded = self.overlays.len(),
                "Fresh fetch supersedes optimistic votes"
            );
        }
        self.overlays.clear();
        self.records = records;
        self.rebuild();
    }

    /// Merge an additional page (root pagination or a "more replies"
    /// fetch) into the flat list.
    ///
    /// Known ids are refreshed in place, keeping their original position;
    /// new ids append in delivered order. A refreshed id also drops its
    /// vote overlay, since the server copy is newer than the optimistic one.
    pub fn merge_page(&mut self, page: Vec<CommentRecord>) {
        let mut refreshed = 0usize;
        let mut appended = 0usize;

        for record in page {
            self.overlays.remove(&record.id);
            if let Some(existing) = self.records.iter_mut().find(|r| r.id == record.id) {
                *existing = record;
                refreshed += 1;
            } else {
                self.records.push(record);
                appended += 1;
            }
        }

        tracing::debug!(
            refreshed,
            appended,
            total = self.records.len(),
            "Merged comment page"
        );
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.tree = CommentTree::build(&self.records, self.options.flat_mode);
        self.cached_rows = None;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn records(&self) -> &[CommentRecord] {
        &self.records
    }

    pub fn tree(&self) -> &CommentTree {
        &self.tree
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    /// The sort the current contents were fetched with; the caller uses
    /// it to parameterize further fetches.
    pub fn sort(&self) -> CommentSortType {
        self.sort
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ========================================================================
    // View Toggles
    // ========================================================================

    /// Switch between nested and flat display. A change rebuilds the
    /// forest from the unchanged flat list.
    pub fn set_flat_mode(&mut self, flat: bool) {
        if self.options.flat_mode != flat {
            self.options.flat_mode = flat;
            self.rebuild();
        }
    }

    /// Record a new sort. Contents are not re-sorted locally; the caller
    /// refetches with this sort and installs the result via [`replace`].
    ///
    /// [`replace`]: ThreadState::replace
    pub fn set_sort(&mut self, sort: CommentSortType) {
        self.sort = sort;
    }

    // ========================================================================
    // Expansion
    // ========================================================================

    pub fn is_expanded(&self, id: i64) -> bool {
        self.expansion.is_expanded(id)
    }

    pub fn toggle_expanded(&mut self, id: i64) {
        self.expansion.toggle(id);
        self.cached_rows = None;
    }

    // ========================================================================
    // Votes
    // ========================================================================

    /// Apply one vote button press optimistically and return the request
    /// to forward to the network collaborator. Unknown ids yield `None`.
    pub fn vote(&mut self, id: i64, action: VoteAction) -> Option<VoteIntent> {
        let next = self.scores(id)?.apply(action);
        tracing::debug!(
            comment_id = id,
            vote = next.vote_value(),
            score = next.score,
            "Applying optimistic vote"
        );
        self.overlays.insert(id, next);
        Some(VoteIntent {
            comment_id: id,
            vote: next.vote_value(),
        })
    }

    /// Scores to display for a comment: the pending optimistic snapshot
    /// when one exists, otherwise the delivered record's counts.
    pub fn scores(&self, id: i64) -> Option<InstantScores> {
        if let Some(overlay) = self.overlays.get(&id) {
            return Some(*overlay);
        }
        self.tree
            .get(id)
            .map(|node| InstantScores::from_record(node.record()))
    }

    pub fn has_pending_vote(&self, id: i64) -> bool {
        self.overlays.contains_key(&id)
    }

    /// Roll back the optimistic snapshot after the vote request failed,
    /// restoring the delivered counts. Returns false when nothing was
    /// pending.
    pub fn revert_vote(&mut self, id: i64) -> bool {
        let reverted = self.overlays.remove(&id).is_some();
        if reverted {
            tracing::warn!(comment_id = id, "Vote failed, reverting optimistic scores");
        }
        reverted
    }

    // ========================================================================
    // Rows and Child Fetches
    // ========================================================================

    /// The visible row sequence, cached until a mutation invalidates it.
    pub fn rows(&mut self) -> &[ThreadRow] {
        if self.cached_rows.is_none() {
            let rows = self.tree.visible_rows(&self.expansion, &self.options);
            self.cached_rows = Some(rows);
        }
        self.cached_rows.as_deref().unwrap_or_default()
    }

    /// Build the visible rows without touching the cache. For read-only
    /// callers that cannot borrow the state mutably.
    pub fn rows_uncached(&self) -> Vec<ThreadRow> {
        self.tree.visible_rows(&self.expansion, &self.options)
    }

    /// The child fetch to issue when the user activates the "more
    /// replies" affordance on `id`, if it is currently warranted.
    pub fn fetch_children(&self, id: i64) -> Option<FetchChildren> {
        let node = self.tree.get(id)?;
        expand::fetch_children(node, &self.expansion, &self.options)
    }
}

impl Default for ThreadState {
    fn default() -> Self {
        Self::new(ViewOptions::default())
    }
}
