use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::CommentRecord;

/// Body text as presented to the viewer.
///
/// Moderator-removed and author-deleted comments keep their slot in the
/// thread but show a placeholder instead of the original content.
/// Removal wins when both flags are set.
pub fn body_text(record: &CommentRecord) -> Cow<'_, str> {
    if record.removed {
        Cow::Borrowed("*Removed*")
    } else if record.deleted {
        Cow::Borrowed("*Deleted*")
    } else {
        Cow::Borrowed(record.content.as_str())
    }
}

/// Compact score for footer lines: `842`, `1.2k`, `87k`, `1.3m`.
///
/// One decimal while it carries information, dropped once the integer
/// part reaches two digits. Negative scores keep their sign.
pub fn format_score(score: i64) -> String {
    let sign = if score < 0 { "-" } else { "" };
    let abs = score.unsigned_abs();

    match abs {
        0..=999 => format!("{}{}", sign, abs),
        1_000..=9_949 => format!("{}{:.1}k", sign, (abs as f64) / 1000.0),
        9_950..=999_499 => format!("{}{}k", sign, (abs as f64 / 1000.0).round() as u64),
        _ => format!("{}{:.1}m", sign, (abs as f64) / 1_000_000.0),
    }
}

const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// One-line preview of comment text for list rows.
///
/// Takes the first line, drops control characters, and truncates to a
/// terminal-cell budget with an ellipsis. Returns borrowed text on the
/// common path (single clean line that fits).
pub fn preview(text: &str, max_cells: usize) -> Cow<'_, str> {
    let line = text.lines().next().unwrap_or("");

    let clean: Cow<'_, str> = if line.chars().any(char::is_control) {
        Cow::Owned(line.chars().filter(|c| !c.is_control()).collect())
    } else {
        Cow::Borrowed(line)
    };

    if UnicodeWidthStr::width(clean.as_ref()) <= max_cells {
        return clean;
    }

    // Too narrow for text plus ellipsis: hard cut, no ellipsis.
    let budget = if max_cells > ELLIPSIS_WIDTH {
        max_cells - ELLIPSIS_WIDTH
    } else {
        max_cells
    };

    let mut used = 0;
    let mut out = String::new();
    for c in clean.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if max_cells > ELLIPSIS_WIDTH {
        out.push_str(ELLIPSIS);
    }
    Cow::Owned(out)
}
