//! Forest construction from a flat comment list.
//!
//! The API delivers comments as a flat page, already ordered for display
//! (parents before their children within the page). One pass over that
//! list assembles the forest: every node lives in a single arena `Vec`,
//! parents hold child indices, and a side map resolves ids to arena
//! slots. No local re-sorting: delivered order is trusted for roots and
//! siblings alike.

use std::collections::HashMap;

use crate::model::CommentRecord;

// ============================================================================
// Arena Node
// ============================================================================

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) record: CommentRecord,
    pub(crate) depth: usize,
    /// Arena indices of direct children, in delivered order.
    pub(crate) children: Vec<usize>,
}

// ============================================================================
// Comment Tree
// ============================================================================

/// An ordered forest of comments, rebuilt from scratch whenever the
/// underlying flat list changes. Nodes are never mutated in place.
#[derive(Debug, Clone)]
pub struct CommentTree {
    nodes: Vec<NodeData>,
    by_id: HashMap<i64, usize>,
    /// Arena indices of top-level nodes, in delivered order.
    roots: Vec<usize>,
    flat: bool,
}

impl CommentTree {
    /// Build the forest.
    ///
    /// In flat mode every record becomes a depth-0 root in input order.
    /// In nested mode a record attaches under its immediate parent when
    /// that parent already appeared in the list; otherwise it is promoted
    /// to a root. Promotion covers lazily paginated ancestors and
    /// malformed lineages alike; neither is an error here.
    pub fn build(records: &[CommentRecord], flat: bool) -> Self {
        let mut tree = Self {
            nodes: Vec::with_capacity(records.len()),
            by_id: HashMap::with_capacity(records.len()),
            roots: Vec::new(),
            flat,
        };

        for record in records {
            if tree.by_id.contains_key(&record.id) {
                tracing::debug!(comment_id = record.id, "Skipping duplicate comment id");
                continue;
            }

            let parent_index = if flat {
                None
            } else {
                record.parent_id().and_then(|pid| {
                    let found = tree.by_id.get(&pid).copied();
                    if found.is_none() {
                        tracing::debug!(
                            comment_id = record.id,
                            parent_id = pid,
                            "Parent not in page, promoting comment to root"
                        );
                    }
                    found
                })
            };

            let index = tree.nodes.len();
            match parent_index {
                Some(parent) => {
                    let depth = tree.nodes[parent].depth + 1;
                    tree.nodes.push(NodeData {
                        record: record.clone(),
                        depth,
                        children: Vec::new(),
                    });
                    tree.nodes[parent].children.push(index);
                }
                None => {
                    tree.nodes.push(NodeData {
                        record: record.clone(),
                        depth: 0,
                        children: Vec::new(),
                    });
                    tree.roots.push(index);
                }
            }
            tree.by_id.insert(record.id, index);
        }

        tree
    }

    /// An empty forest (what an unfetched discussion renders as).
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            by_id: HashMap::new(),
            roots: Vec::new(),
            flat: false,
        }
    }

    pub fn is_flat(&self) -> bool {
        self.flat
    }

    /// Total nodes in the forest.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level nodes in delivered order.
    pub fn roots(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.roots.iter().map(move |&index| NodeRef { tree: self, index })
    }

    /// Look up a node by comment id.
    pub fn get(&self, id: i64) -> Option<NodeRef<'_>> {
        self.by_id.get(&id).map(|&index| NodeRef { tree: self, index })
    }

    pub(crate) fn node(&self, index: usize) -> &NodeData {
        &self.nodes[index]
    }
}

// ============================================================================
// Node Handle
// ============================================================================

/// Borrowing handle to one node in a [`CommentTree`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    pub(crate) tree: &'a CommentTree,
    pub(crate) index: usize,
}

impl<'a> NodeRef<'a> {
    pub fn record(&self) -> &'a CommentRecord {
        &self.tree.node(self.index).record
    }

    pub fn id(&self) -> i64 {
        self.record().id
    }

    /// Distance from the root this node landed under. Differs from the
    /// lineage's claimed depth when ancestors were missing from the page.
    pub fn depth(&self) -> usize {
        self.tree.node(self.index).depth
    }

    /// Direct children in delivered order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let tree = self.tree;
        tree.node(self.index)
            .children
            .iter()
            .map(move |&index| NodeRef { tree, index })
    }

    /// Number of locally fetched direct children.
    pub fn child_len(&self) -> usize {
        self.tree.node(self.index).children.len()
    }

    /// True when the server reports descendants none of which are in the
    /// local page yet.
    pub fn has_unfetched_children(&self) -> bool {
        self.child_len() == 0 && self.record().counts.child_count > 0
    }

    pub(crate) fn in_flat_tree(&self) -> bool {
        self.tree.flat
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id())
            .field("depth", &self.depth())
            .field("children", &self.child_len())
            .finish()
    }
}
