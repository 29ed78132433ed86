//! Data model for comments as delivered by the remote API.
//!
//! The external API client decodes responses into these shapes and hands
//! this crate a flat, server-ordered list per fetch:
//!
//! - [`CommentRecord`] - one comment with counts, flags, and author
//! - [`CommentPath`] - the dotted lineage wire form, parsed and typed
//! - [`CommentSortType`] - the server-side sort the listing was fetched with
//!
//! Records are values: nothing here is mutated in place. A refresh
//! delivers replacement records and downstream state is rebuilt from them.

mod path;
mod types;

pub use path::{CommentPath, CommentPathError};
pub use types::{CommentCounts, CommentRecord, CommentSortType, PersonRef};
