//! Comment forest construction and flattening.
//!
//! Two passes stand between a fetched page and the screen:
//!
//! - [`builder`] - one pass over the flat list assembles an id-indexed
//!   arena forest, trusting delivered order and promoting comments with
//!   missing ancestors to roots
//! - [`visible`] - a pre-order walk gated on expansion state produces the
//!   renderable row sequence, including "more replies" affordances
//!
//! The forest is a pure function of the flat list and the flat-mode flag;
//! it is rebuilt wholesale on every change rather than patched in place.

mod builder;
mod visible;

pub use builder::{CommentTree, NodeRef};
pub use visible::{RowKind, ThreadRow};
