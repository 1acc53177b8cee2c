//! Grid, position, and row-width convention.

use std::fmt;

use serde::Serialize;

/// Cell address `(row, col)`; identity is value equality.
///
/// Ordering is row-major, which is also the scan order used by validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Column-bound convention for adjacency and validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowWidth {
    /// Every row is bounded by the first row's width. Cells past that width in
    /// longer rows are kept in the map but are never reached as neighbors.
    #[default]
    FirstRow,
    /// All rows must have the first row's width; ragged grids are rejected.
    Strict,
}

/// Immutable grid of single-character cells. Rows may differ in length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<char>>) -> Self {
        Self { rows }
    }

    /// One row per string, one cell per `char`.
    pub fn from_strs<S: AsRef<str>>(rows: &[S]) -> Self {
        Self {
            rows: rows.iter().map(|r| r.as_ref().chars().collect()).collect(),
        }
    }

    /// Parse text with one row per line. A trailing newline does not add an
    /// empty row; `\r\n` line endings are accepted.
    pub fn parse(text: &str) -> Self {
        Self {
            rows: text.lines().map(|l| l.chars().collect()).collect(),
        }
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the first row; the column bound used by adjacency.
    #[inline]
    pub fn first_row_width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        self.rows.get(pos.row)?.get(pos.col).copied()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: String = row.iter().collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
