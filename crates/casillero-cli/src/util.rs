use anyhow::Result;
use casillero_core::sheet::column_index;

use crate::error::invalid_input;

/// Parses a single A1 cell reference such as `B3` into 0-indexed
/// `(row, col)`.
pub fn parse_cell_ref(raw: &str) -> Result<(usize, usize)> {
    let trimmed = raw.trim();
    let split = trimmed
        .find(|ch: char| ch.is_ascii_digit())
        .ok_or_else(|| invalid_input(format!("invalid cell reference: {raw}")))?;
    let (letters, digits) = trimmed.split_at(split);
    let col = column_index(letters)
        .ok_or_else(|| invalid_input(format!("invalid cell reference: {raw}")))?;
    let row: usize = digits
        .parse()
        .ok()
        .filter(|row| *row > 0)
        .ok_or_else(|| invalid_input(format!("invalid cell reference: {raw}")))?;
    Ok((row - 1, col))
}

pub fn optional_text(value: Option<String>) -> Option<String> {
    value.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
