use crate::error::{Result, StoreError};
use casillero_core::{A1Range, Grid};
use rusqlite::{params, Connection, OptionalExtension};

/// Cell-level access to the local workbook. This is the only place that
/// knows how sheets are laid out in SQLite; everything above it works on
/// [`Grid`]s and rows.
#[derive(Clone, Copy)]
pub struct Workbook<'a> {
    conn: &'a Connection,
}

impl<'a> Workbook<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Reads `range` as a grid anchored at the range's top-left cell.
    /// Trailing empty rows are not returned and open-ended ranges stop at the
    /// last populated row.
    pub fn fetch(&self, range: &A1Range) -> Result<Grid> {
        let mut stmt = self.conn.prepare(
            "SELECT row_idx, col_idx, value
             FROM cells
             WHERE sheet = ?1
               AND row_idx >= ?2
               AND (?3 IS NULL OR row_idx <= ?3)
               AND col_idx BETWEEN ?4 AND ?5
               AND value <> ''
             ORDER BY row_idx ASC, col_idx ASC;",
        )?;
        let mut rows = stmt.query(params![
            range.sheet,
            to_sql_index(range.start_row)?,
            range.end_row.map(to_sql_index).transpose()?,
            to_sql_index(range.start_col)?,
            to_sql_index(range.end_col)?,
        ])?;

        let mut grid: Grid = Vec::new();
        while let Some(row) = rows.next()? {
            let row_idx = from_sql_index(row.get(0)?)? - range.start_row;
            let col_idx = from_sql_index(row.get(1)?)? - range.start_col;
            let value: String = row.get(2)?;
            if grid.len() <= row_idx {
                grid.resize_with(row_idx + 1, Vec::new);
            }
            let cells = &mut grid[row_idx];
            if cells.len() <= col_idx {
                cells.resize(col_idx + 1, String::new());
            }
            cells[col_idx] = value;
        }
        Ok(grid)
    }

    /// Writes `values` on the first row below everything already stored in
    /// the range's columns, starting at the range's first column. Returns the
    /// 1-based sheet row number that was written.
    pub fn append(&self, range: &A1Range, values: &[String]) -> Result<usize> {
        if values.len() > range.width() {
            return Err(StoreError::RowTooWide {
                range: range.to_string(),
                len: values.len(),
                width: range.width(),
            });
        }

        let tx = self.conn.unchecked_transaction()?;
        let last: Option<i64> = tx
            .query_row(
                "SELECT MAX(row_idx) FROM cells
                 WHERE sheet = ?1 AND col_idx BETWEEN ?2 AND ?3;",
                params![
                    range.sheet,
                    to_sql_index(range.start_col)?,
                    to_sql_index(range.end_col)?
                ],
                |row| row.get(0),
            )
            .optional()?
            .flatten();
        let next_row = match last {
            Some(last) => (from_sql_index(last)? + 1).max(range.start_row),
            None => range.start_row,
        };

        {
            let mut insert = tx.prepare(
                "INSERT OR REPLACE INTO cells (sheet, row_idx, col_idx, value)
                 VALUES (?1, ?2, ?3, ?4);",
            )?;
            for (offset, value) in values.iter().enumerate() {
                insert.execute(params![
                    range.sheet,
                    to_sql_index(next_row)?,
                    to_sql_index(range.start_col + offset)?,
                    value
                ])?;
            }
        }
        tx.commit()?;
        Ok(next_row + 1)
    }

    /// Overwrites a single cell; an empty value clears it.
    pub fn set_cell(&self, sheet: &str, row: usize, col: usize, value: &str) -> Result<()> {
        if value.is_empty() {
            self.conn.execute(
                "DELETE FROM cells WHERE sheet = ?1 AND row_idx = ?2 AND col_idx = ?3;",
                params![sheet, to_sql_index(row)?, to_sql_index(col)?],
            )?;
            return Ok(());
        }
        self.conn.execute(
            "INSERT OR REPLACE INTO cells (sheet, row_idx, col_idx, value)
             VALUES (?1, ?2, ?3, ?4);",
            params![sheet, to_sql_index(row)?, to_sql_index(col)?, value],
        )?;
        Ok(())
    }

    pub fn sheet_names(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT sheet FROM cells ORDER BY sheet ASC;")?;
        let mut rows = stmt.query([])?;
        let mut names = Vec::new();
        while let Some(row) = rows.next()? {
            names.push(row.get(0)?);
        }
        Ok(names)
    }
}

fn to_sql_index(index: usize) -> Result<i64> {
    i64::try_from(index).map_err(|_| StoreError::InvalidCellIndex(i64::MAX))
}

fn from_sql_index(value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| StoreError::InvalidCellIndex(value))
}
