//! View options for thread presentation.
//!
//! Host applications typically keep these in a `[comments]`-style section
//! of their config file; the file is optional and every key has a
//! default, so any subset may be specified. Unknown keys are ignored.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::layout::DEFAULT_GUIDELINE_COLORS;
use crate::model::CommentSortType;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to read options file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML in options file: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// View Options
// ============================================================================

/// Presentation and fetch options for one discussion view.
///
/// All fields use `#[serde(default)]` so any subset of keys can be
/// specified; missing keys fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    /// Render the thread as a flat list instead of a nested tree.
    pub flat_mode: bool,

    /// Sort requested from the server for fresh comment fetches.
    pub default_sort: CommentSortType,

    /// Depth at which visual indentation stops growing.
    pub max_indent_depth: usize,

    /// Terminal cells of indentation per nesting level.
    pub indent_width: u16,

    /// Size of the guideline color palette the renderer cycles through.
    pub guideline_colors: usize,

    /// Maximum child comments requested per "more replies" fetch.
    pub fetch_limit: u32,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            flat_mode: false,
            default_sort: CommentSortType::Hot,
            max_indent_depth: 6,
            indent_width: 2,
            guideline_colors: DEFAULT_GUIDELINE_COLORS,
            fetch_limit: 50,
        }
    }
}

impl ViewOptions {
    /// Load options from a TOML file. A missing file is not an error and
    /// yields the defaults; unreadable or malformed files are.
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No options file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        Self::from_toml_str(&raw)
    }

    /// Parse options from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(raw)?)
    }
}
