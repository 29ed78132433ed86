//! Integration tests for the discussion lifecycle: load, collapse, vote,
//! paginate, refresh.
//!
//! Each test builds its own `ThreadState` from plain fixture records.
//! These tests exercise the crate end-to-end the way a client would drive
//! it, verifying that tree building, expansion, optimistic votes, and
//! page merging compose correctly.

use warren::model::{CommentCounts, CommentRecord, CommentSortType, PersonRef};
use warren::options::ViewOptions;
use warren::thread::ThreadState;
use warren::tree::RowKind;
use warren::util::{body_text, format_score};
use warren::vote::VoteAction;

use chrono::{TimeZone, Utc};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn comment(id: i64, path: &str, content: &str) -> CommentRecord {
    CommentRecord {
        id,
        path: path.parse().unwrap(),
        content: content.to_string(),
        removed: false,
        deleted: false,
        counts: CommentCounts {
            score: 10,
            upvotes: 11,
            downvotes: 1,
            child_count: 0,
        },
        my_vote: None,
        creator: PersonRef {
            id: 100 + id,
            name: format!("user{}", id),
            instance: None,
        },
        published: Utc.with_ymd_and_hms(2023, 1, 15, 10, 30, 0).unwrap(),
        updated: None,
    }
}

fn with_children(mut record: CommentRecord, child_count: i64) -> CommentRecord {
    record.counts.child_count = child_count;
    record
}

// ============================================================================
// Load and Render
// ============================================================================

#[test]
fn test_loaded_thread_renders_preorder_rows() {
    init_tracing();
    let mut thread = ThreadState::new(ViewOptions::default());
    thread.replace(vec![
        with_children(comment(1, "0.1", "top"), 2),
        comment(2, "0.1.2", "reply"),
        comment(3, "0.1.2.3", "deep reply"),
        comment(4, "0.4", "second top"),
    ]);

    let ids: Vec<i64> = thread.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    let depths: Vec<usize> = thread.rows().iter().map(|r| r.depth).collect();
    assert_eq!(depths, vec![0, 1, 2, 0]);
}

#[test]
fn test_api_shaped_page_decodes_and_loads() {
    // A page as the external API client would decode it from JSON.
    let page: Vec<CommentRecord> = serde_json::from_str(
        r#"[
            {
                "id": 15,
                "path": "0.15",
                "content": "parent",
                "counts": { "score": 3, "upvotes": 3, "downvotes": 0, "child_count": 1 },
                "creator": { "id": 1, "name": "alice" },
                "published": "2023-01-15T10:30:00Z"
            },
            {
                "id": 27,
                "path": "0.15.27",
                "content": "child",
                "counts": { "score": 1, "upvotes": 1, "downvotes": 0, "child_count": 0 },
                "my_vote": -1,
                "creator": { "id": 2, "name": "bob", "instance": "feddit.example" },
                "published": "2023-01-15T11:00:00Z"
            }
        ]"#,
    )
    .unwrap();

    let mut thread = ThreadState::new(ViewOptions::default());
    thread.replace(page);

    assert_eq!(thread.rows().len(), 2);
    assert_eq!(thread.tree().get(27).unwrap().depth(), 1);
    assert_eq!(thread.scores(27).unwrap().my_vote, Some(-1));
}

#[test]
fn test_moderated_bodies_substituted() {
    let mut removed = comment(1, "0.1", "rule-breaking text");
    removed.removed = true;
    let mut deleted = comment(2, "0.2", "second thoughts");
    deleted.deleted = true;

    let mut thread = ThreadState::new(ViewOptions::default());
    thread.replace(vec![removed, deleted, comment(3, "0.3", "fine")]);

    let bodies: Vec<String> = thread
        .records()
        .iter()
        .map(|r| body_text(r).into_owned())
        .collect();
    assert_eq!(bodies, vec!["*Removed*", "*Deleted*", "fine"]);
}

// ============================================================================
// Collapse / Expand
// ============================================================================

#[test]
fn test_collapse_survives_page_merge() {
    let mut thread = ThreadState::new(ViewOptions::default());
    thread.replace(vec![
        with_children(comment(1, "0.1", "top"), 1),
        comment(2, "0.1.2", "reply"),
        comment(4, "0.4", "second top"),
    ]);

    thread.toggle_expanded(1);
    assert_eq!(thread.rows().len(), 2); // 1 (collapsed), 4

    // A new root page arrives; the rebuild must keep 1 collapsed.
    thread.merge_page(vec![comment(5, "0.5", "third top")]);
    let ids: Vec<i64> = thread.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 4, 5]);
    assert!(!thread.is_expanded(1));
}

// ============================================================================
// More-Replies Pagination
// ============================================================================

#[test]
fn test_more_replies_fetch_and_merge() {
    init_tracing();
    let mut thread = ThreadState::new(ViewOptions::default());
    thread.replace(vec![
        with_children(comment(1, "0.1", "top"), 2),
        comment(4, "0.4", "second top"),
    ]);

    // The affordance row is visible under comment 1.
    let more: Vec<_> = thread
        .rows()
        .iter()
        .filter(|r| matches!(r.kind, RowKind::MoreReplies { .. }))
        .cloned()
        .collect();
    assert_eq!(more.len(), 1);
    assert_eq!(more[0].id, 1);
    assert_eq!(more[0].kind, RowKind::MoreReplies { count: 2 });

    // Activating it yields the request the caller sends out.
    let req = thread.fetch_children(1).unwrap();
    assert_eq!(req.parent_id, 1);
    assert_eq!(req.offset, 0);
    assert_eq!(req.limit, thread.options().fetch_limit);

    // The response merges in parent-first order and attaches.
    thread.merge_page(vec![
        comment(2, "0.1.2", "fetched reply"),
        comment(3, "0.1.2.3", "fetched deep reply"),
    ]);

    let ids: Vec<i64> = thread.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert!(thread
        .rows()
        .iter()
        .all(|r| !matches!(r.kind, RowKind::MoreReplies { .. })));
    assert_eq!(thread.fetch_children(1), None);
}

#[test]
fn test_orphaned_context_promotes_to_root() {
    // Viewing a deep permalink: the page starts mid-thread, so the
    // lineage references ancestors that were never delivered.
    let mut thread = ThreadState::new(ViewOptions::default());
    thread.replace(vec![
        comment(9, "0.1.8.9", "context comment"),
        comment(10, "0.1.8.9.10", "its reply"),
    ]);

    let rows = thread.rows().to_vec();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, 9);
    assert_eq!(rows[0].depth, 0);
    assert_eq!(rows[1].id, 10);
    assert_eq!(rows[1].depth, 1);
}

// ============================================================================
// Optimistic Votes
// ============================================================================

#[test]
fn test_vote_round_trip_with_confirmation() {
    init_tracing();
    let mut thread = ThreadState::new(ViewOptions::default());
    thread.replace(vec![comment(1, "0.1", "top")]);

    // Optimistic press: visible score moves, record stays.
    let intent = thread.vote(1, VoteAction::Upvote).unwrap();
    assert_eq!(intent.vote, 1);
    assert_eq!(thread.scores(1).unwrap().score, 11);
    assert_eq!(format_score(thread.scores(1).unwrap().score), "11");
    assert_eq!(thread.records()[0].counts.score, 10);

    // Server confirms via a refreshed record.
    let mut confirmed = comment(1, "0.1", "top");
    confirmed.counts.score = 11;
    confirmed.counts.upvotes = 12;
    confirmed.my_vote = Some(1);
    thread.merge_page(vec![confirmed]);

    assert!(!thread.has_pending_vote(1));
    let scores = thread.scores(1).unwrap();
    assert_eq!(scores.score, 11);
    assert_eq!(scores.my_vote, Some(1));
}

#[test]
fn test_vote_failure_rolls_back() {
    let mut thread = ThreadState::new(ViewOptions::default());
    thread.replace(vec![comment(1, "0.1", "top")]);

    thread.vote(1, VoteAction::Downvote);
    assert_eq!(thread.scores(1).unwrap().score, 9);

    // The network call failed; the caller reverts.
    assert!(thread.revert_vote(1));
    let scores = thread.scores(1).unwrap();
    assert_eq!(scores.score, 10);
    assert_eq!(scores.my_vote, None);
}

// ============================================================================
// Options and Display Modes
// ============================================================================

#[test]
fn test_flat_mode_from_options_file() {
    let options = ViewOptions::from_toml_str(
        r#"
        flat_mode = true
        default_sort = "new"
        "#,
    )
    .unwrap();

    let mut thread = ThreadState::new(options);
    assert_eq!(thread.sort(), CommentSortType::New);

    thread.replace(vec![
        with_children(comment(1, "0.1", "top"), 1),
        comment(2, "0.1.2", "reply"),
    ]);

    // Flat: every comment at depth 0, no child-fetch affordances.
    assert!(thread.rows().iter().all(|r| r.depth == 0));
    assert_eq!(thread.fetch_children(1), None);

    // Switching to nested restores the hierarchy from the same list.
    thread.set_flat_mode(false);
    let depths: Vec<usize> = thread.rows().iter().map(|r| r.depth).collect();
    assert_eq!(depths, vec![0, 1]);
}

#[test]
fn test_deep_thread_clamps_indent_and_cycles_guidelines() {
    let options = ViewOptions::default();
    let mut thread = ThreadState::new(options.clone());

    // A strictly nested chain deeper than the indent cap.
    let mut records = Vec::new();
    let mut path = String::from("0");
    for id in 1..=10 {
        path.push_str(&format!(".{}", id));
        records.push(comment(id, &path, "deep"));
    }
    thread.replace(records);

    let rows = thread.rows();
    assert_eq!(rows.len(), 10);
    // Depth keeps counting; indentation stops at the cap.
    assert_eq!(rows[9].depth, 9);
    let cap_cells = options.max_indent_depth as u16 * options.indent_width;
    assert_eq!(rows[9].indent_cells, cap_cells);
    assert_eq!(rows[options.max_indent_depth].indent_cells, cap_cells);
    // Guideline colors cycle past the palette size.
    assert_eq!(rows[0].guideline, None);
    assert_eq!(rows[1].guideline, Some(0));
    assert_eq!(
        rows[options.guideline_colors].guideline,
        Some(options.guideline_colors - 1)
    );
    assert_eq!(rows[options.guideline_colors + 1].guideline, Some(0));
}
