//! Pure layout math for nested comments.
//!
//! Depth is unbounded in the data but not on screen: indentation clamps
//! at a configured cap, and each nesting level gets a vertical guideline
//! whose color cycles through a fixed palette. The renderer owns the
//! actual palette; this module only computes levels and indices.

/// Number of guideline colors the reference renderer ships.
pub const DEFAULT_GUIDELINE_COLORS: usize = 7;

/// Visual nesting level for a node: the real depth, clamped at `cap` so
/// deep threads stop marching off the edge of the viewport.
pub fn indent_level(depth: usize, cap: usize) -> usize {
    depth.min(cap)
}

/// Indentation in terminal cells: clamped level times per-level width.
pub fn indent_cells(depth: usize, cap: usize, cell_width: u16) -> u16 {
    (indent_level(depth, cap) as u16).saturating_mul(cell_width)
}

/// Palette index for the guideline at `depth`.
///
/// Top-level comments draw no guideline. Below that the index cycles with
/// period `palette_len`, so depth 1 and depth `palette_len + 1` share a
/// color. An empty palette yields `None` at every depth.
pub fn guideline_color_index(depth: usize, palette_len: usize) -> Option<usize> {
    if depth == 0 || palette_len == 0 {
        return None;
    }
    Some((depth - 1) % palette_len)
}
