pub mod a1;

pub use a1::{column_index, column_letters, A1Range};

use serde::{Deserialize, Serialize};

/// Sparse 2-D text grid as returned by a range fetch. Rows may be shorter
/// than their neighbours and missing cells read as empty.
pub type Grid = Vec<Vec<String>>;

pub fn cell(row: &[String], col: usize) -> &str {
    row.get(col).map(String::as_str).unwrap_or("")
}

/// Inclusive, 0-indexed rectangle inside a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRange {
    pub start_row: usize,
    pub end_row: usize,
    pub start_col: usize,
    pub end_col: usize,
}

impl CellRange {
    pub fn new(start_row: usize, end_row: usize, start_col: usize, end_col: usize) -> Self {
        Self {
            start_row,
            end_row,
            start_col,
            end_col,
        }
    }
}

/// Renders the cells of `range` as text: the trimmed non-empty cells of each
/// row are joined by a space, rows without any such cell are dropped, and the
/// remaining lines are joined by a newline.
pub fn extract_range(grid: &[Vec<String>], range: CellRange) -> String {
    if range.start_row > range.end_row || range.start_col > range.end_col {
        return String::new();
    }

    let mut lines = Vec::new();
    for row in grid
        .iter()
        .skip(range.start_row)
        .take((range.end_row - range.start_row).saturating_add(1))
    {
        let parts: Vec<&str> = row
            .iter()
            .skip(range.start_col)
            .take((range.end_col - range.start_col).saturating_add(1))
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .collect();
        if !parts.is_empty() {
            lines.push(parts.join(" "));
        }
    }
    lines.join("\n")
}
