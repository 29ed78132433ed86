//! Collapse/expand state and the "more replies" decision layer.
//!
//! Expansion is keyed by comment id, not node identity, so it survives
//! the full tree rebuilds that follow every page merge. Only the
//! *collapsed* ids are stored: an id nobody ever touched is expanded by
//! construction, and lookups cannot fail.
//!
//! This module also decides when a node should surface a "load more
//! replies" affordance and what fetch request that affordance maps to.
//! Actually issuing the fetch, and merging its results back into the
//! flat list, belongs to the caller.

use std::collections::HashSet;

use crate::options::ViewOptions;
use crate::tree::NodeRef;

// ============================================================================
// Expansion State
// ============================================================================

/// Per-discussion collapse state. Dropped when the user navigates away.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    collapsed: HashSet<i64>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a comment's subtree is visible. Ids never toggled are
    /// expanded.
    pub fn is_expanded(&self, id: i64) -> bool {
        !self.collapsed.contains(&id)
    }

    /// Flip the state for one comment. Applying twice restores the
    /// original state.
    pub fn toggle(&mut self, id: i64) {
        if !self.collapsed.remove(&id) {
            self.collapsed.insert(id);
        }
    }

    pub fn collapse(&mut self, id: i64) {
        self.collapsed.insert(id);
    }

    pub fn expand(&mut self, id: i64) {
        self.collapsed.remove(&id);
    }

    /// Number of explicitly collapsed comments.
    pub fn collapsed_len(&self) -> usize {
        self.collapsed.len()
    }

    /// Expand everything again.
    pub fn clear(&mut self) {
        self.collapsed.clear();
    }
}

// ============================================================================
// More-Replies Pagination
// ============================================================================

/// Request for additional child comments, handed to the network
/// collaborator. `offset` is the number of children already held locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchChildren {
    pub parent_id: i64,
    pub offset: u32,
    pub limit: u32,
}

/// Whether `node` should surface a "load more replies" affordance:
/// it is expanded, none of its children are fetched, the server reports
/// descendants, and the view is not flat.
pub fn wants_more_children(node: NodeRef<'_>, expansion: &ExpansionState) -> bool {
    expansion.is_expanded(node.id()) && node.has_unfetched_children() && !node.in_flat_tree()
}

/// The fetch request for `node`'s missing children, or `None` when the
/// affordance should not be shown.
pub fn fetch_children(
    node: NodeRef<'_>,
    expansion: &ExpansionState,
    options: &ViewOptions,
) -> Option<FetchChildren> {
    wants_more_children(node, expansion).then(|| FetchChildren {
        parent_id: node.id(),
        offset: node.child_len() as u32,
        limit: options.fetch_limit,
    })
}
