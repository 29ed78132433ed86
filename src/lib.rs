//! Client-side comment-thread state for federated link aggregators.
//!
//! A discussion arrives from the remote API as flat, server-ordered pages
//! of [`model::CommentRecord`]s, each carrying its full lineage. This
//! crate turns those pages into what a client renders:
//!
//! - [`tree`] builds an id-indexed forest from the flat list (flat or
//!   nested display) and flattens it back into visible rows
//! - [`expand`] tracks collapse state by comment id and decides when a
//!   "more replies" fetch is warranted
//! - [`vote`] computes optimistic score snapshots for instant vote
//!   feedback
//! - [`layout`] clamps indentation and cycles guideline colors
//! - [`thread`] ties the above together per viewed discussion
//! - [`options`] loads view options from an optional TOML file
//! - [`util`] formats bodies, scores, and previews for display
//!
//! Networking, persistence, and rendering stay outside: fetched pages are
//! pushed in, and outgoing work (child fetches, vote submissions) comes
//! back as plain request values for the host application to execute.
//!
//! # Example
//!
//! ```
//! use warren::model::CommentRecord;
//! use warren::options::ViewOptions;
//! use warren::thread::ThreadState;
//! use warren::vote::VoteAction;
//!
//! let page: Vec<CommentRecord> = serde_json::from_str(
//!     r#"[{
//!         "id": 1,
//!         "path": "0.1",
//!         "content": "first!",
//!         "counts": { "score": 5, "upvotes": 5, "downvotes": 0, "child_count": 0 },
//!         "creator": { "id": 7, "name": "alice" },
//!         "published": "2023-01-15T10:30:00Z"
//!     }]"#,
//! )
//! .unwrap();
//!
//! let mut thread = ThreadState::new(ViewOptions::default());
//! thread.replace(page);
//!
//! // One visible row; voting moves the score before the server answers.
//! assert_eq!(thread.rows().len(), 1);
//! let intent = thread.vote(1, VoteAction::Upvote).unwrap();
//! assert_eq!(intent.vote, 1);
//! assert_eq!(thread.scores(1).unwrap().score, 6);
//! ```

pub mod expand;
pub mod layout;
pub mod model;
pub mod options;
pub mod thread;
pub mod tree;
pub mod util;
pub mod vote;

pub use expand::{ExpansionState, FetchChildren};
pub use model::{CommentPath, CommentRecord, CommentSortType};
pub use options::ViewOptions;
pub use thread::ThreadState;
pub use tree::{CommentTree, RowKind, ThreadRow};
pub use vote::{InstantScores, VoteAction, VoteIntent};
