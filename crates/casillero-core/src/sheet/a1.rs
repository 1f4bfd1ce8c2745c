use crate::error::CoreError;
use crate::sheet::CellRange;
use std::fmt;
use std::str::FromStr;

/// A range in spreadsheet A1 notation, e.g. `Clientes!A2:H`,
/// `'Hoja 1'!B3:D9` or a bare `A1:C7`.
///
/// Rows and columns are stored 0-indexed. `end_row: None` means the range
/// runs to the last populated row of the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Range {
    pub sheet: String,
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: Option<usize>,
    pub end_col: usize,
}

impl A1Range {
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidRange(input.to_string());
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let (sheet, cells) = match trimmed.rsplit_once('!') {
            Some((sheet, cells)) => (unquote_sheet(sheet).ok_or_else(invalid)?, cells),
            None => (String::new(), trimmed),
        };

        let (start, end) = match cells.split_once(':') {
            Some((start, end)) => (start, Some(end)),
            None => (cells, None),
        };

        let (start_col, start_row) = parse_endpoint(start).ok_or_else(invalid)?;
        let start_row = start_row.unwrap_or(0);
        let (end_col, end_row) = match end {
            Some(end) => parse_endpoint(end).ok_or_else(invalid)?,
            None => (start_col, Some(start_row)),
        };

        if end_col < start_col {
            return Err(invalid());
        }
        if let Some(end_row) = end_row {
            if end_row < start_row {
                return Err(invalid());
            }
        }

        Ok(Self {
            sheet,
            start_row,
            start_col,
            end_row,
            end_col,
        })
    }

    pub fn width(&self) -> usize {
        self.end_col - self.start_col + 1
    }

    /// The bounded rectangle, when the range has an explicit end row.
    pub fn cell_range(&self) -> Option<CellRange> {
        self.end_row.map(|end_row| {
            CellRange::new(self.start_row, end_row, self.start_col, self.end_col)
        })
    }
}

impl FromStr for A1Range {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for A1Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.sheet.is_empty() {
            if self.sheet.chars().all(|ch| ch.is_alphanumeric() || ch == '_') {
                write!(f, "{}!", self.sheet)?;
            } else {
                write!(f, "'{}'!", self.sheet.replace('\'', "''"))?;
            }
        }
        write!(
            f,
            "{}{}:{}",
            column_letters(self.start_col),
            self.start_row + 1,
            column_letters(self.end_col)
        )?;
        if let Some(end_row) = self.end_row {
            write!(f, "{}", end_row + 1)?;
        }
        Ok(())
    }
}

/// `A` -> 0, `Z` -> 25, `AA` -> 26.
pub fn column_index(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }
    let mut index: usize = 0;
    for ch in letters.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let digit = (ch.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        index = index.checked_mul(26)?.checked_add(digit)?;
    }
    Some(index - 1)
}

pub fn column_letters(index: usize) -> String {
    let mut out = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    out.iter().rev().collect()
}

fn unquote_sheet(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.strip_prefix('\'').and_then(|rest| rest.strip_suffix('\'')) {
        Some(inner) if !inner.is_empty() => Some(inner.replace("''", "'")),
        Some(_) => None,
        None => Some(raw.to_string()),
    }
}

fn parse_endpoint(raw: &str) -> Option<(usize, Option<usize>)> {
    let raw = raw.trim();
    let split = raw
        .find(|ch: char| ch.is_ascii_digit())
        .unwrap_or(raw.len());
    let (letters, digits) = raw.split_at(split);
    let col = column_index(letters)?;
    if digits.is_empty() {
        return Some((col, None));
    }
    let row: usize = digits.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((col, Some(row - 1)))
}
