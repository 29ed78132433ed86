//! Presentation helpers shared by renderers.
//!
//! - **Body substitution**: removed/deleted placeholders for moderated
//!   comments
//! - **Score formatting**: compact thousands form for footer lines
//! - **Previews**: Unicode-width-aware one-line truncation for list rows

mod text;

pub use text::{body_text, format_score, preview};
