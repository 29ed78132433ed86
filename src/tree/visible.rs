//! Flattening the forest into the visible row sequence.
//!
//! Renderers draw a scrollable list, not a tree, so the forest is walked
//! pre-order into [`ThreadRow`]s: one row per visible comment, plus a
//! "more replies" row under expanded comments whose children are not
//! fetched yet. Collapsed comments keep their own row and drop their
//! descendants. Rows carry the clamped indent and guideline palette
//! index so the renderer does no depth math of its own.

use crate::expand::{wants_more_children, ExpansionState};
use crate::layout;
use crate::options::ViewOptions;
use crate::tree::{CommentTree, NodeRef};

// ============================================================================
// Rows
// ============================================================================

/// What one visible row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A comment. When collapsed, `hidden` server-reported descendants
    /// are suppressed (for a "[+N]" badge).
    Comment { expanded: bool, hidden: i64 },
    /// "N more replies" affordance for a comment whose children are not
    /// fetched; activating it maps to a child fetch for the same id.
    MoreReplies { count: i64 },
}

/// One entry of the visible, ordered sequence handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadRow {
    /// Comment id; for [`RowKind::MoreReplies`] the id of the comment
    /// whose children are missing.
    pub id: i64,
    pub kind: RowKind,
    /// True nesting depth (not clamped).
    pub depth: usize,
    /// Indentation in terminal cells, clamped per the view options.
    pub indent_cells: u16,
    /// Guideline palette index, `None` at the top level.
    pub guideline: Option<usize>,
}

fn row(id: i64, depth: usize, kind: RowKind, options: &ViewOptions) -> ThreadRow {
    ThreadRow {
        id,
        kind,
        depth,
        indent_cells: layout::indent_cells(depth, options.max_indent_depth, options.indent_width),
        guideline: layout::guideline_color_index(depth, options.guideline_colors),
    }
}

// ============================================================================
// Flattening
// ============================================================================

impl CommentTree {
    /// Pre-order walk of the forest, gated on expansion state.
    pub fn visible_rows(
        &self,
        expansion: &ExpansionState,
        options: &ViewOptions,
    ) -> Vec<ThreadRow> {
        let mut rows = Vec::with_capacity(self.len());
        for root in self.roots() {
            push_subtree(&mut rows, root, expansion, options);
        }
        rows
    }
}

fn push_subtree(
    rows: &mut Vec<ThreadRow>,
    node: NodeRef<'_>,
    expansion: &ExpansionState,
    options: &ViewOptions,
) {
    let expanded = expansion.is_expanded(node.id());
    let hidden = if expanded {
        0
    } else {
        node.record().counts.child_count
    };
    rows.push(row(
        node.id(),
        node.depth(),
        RowKind::Comment { expanded, hidden },
        options,
    ));

    if !expanded {
        return;
    }

    if wants_more_children(node, expansion) {
        rows.push(row(
            node.id(),
            node.depth() + 1,
            RowKind::MoreReplies {
                count: node.record().counts.child_count,
            },
            options,
        ));
    }

    for child in node.children() {
        push_subtree(rows, child, expansion, options);
    }
}
