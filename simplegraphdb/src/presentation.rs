//! Fixed-width table rendering for query results.
//!
//! The first grid row is the header. Every cell is right-padded with spaces
//! to the cell width, or cut to `width - 2` characters plus `..` when it does
//! not fit, and followed by ` | `. A dashed rule follows the header.
//!
//! Widths count characters, so multi-byte terms are never split mid-codepoint.

/// Cell width used when none is configured.
pub const DEFAULT_CELL_WIDTH: usize = 30;

/// Smallest width that leaves room for one character plus the `..` marker.
pub const MIN_CELL_WIDTH: usize = 3;

/// Render `grid` as a table with cells of `cell_width` characters.
#[must_use]
pub fn present_result_grid(grid: &[Vec<String>], cell_width: usize) -> String {
    let mut out = String::new();
    for (i, row) in grid.iter().enumerate() {
        for cell in row {
            out.push_str(&fit_cell(cell, cell_width));
            out.push_str(" | ");
        }
        out.push('\n');
        if i == 0 {
            out.push_str(&"-".repeat((cell_width + 2) * row.len()));
            out.push('\n');
        }
    }
    out
}

fn fit_cell(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    if len >= width {
        let mut cut: String = cell.chars().take(width.saturating_sub(2)).collect();
        cut.push_str("..");
        cut
    } else {
        format!("{cell:<width$}")
    }
}
