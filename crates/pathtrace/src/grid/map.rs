//! Validation of raw grids into the sparse `PositionMap`.

use std::collections::HashMap;

use super::types::{Grid, Position, RowWidth};
use super::{is_valid_cell, EMPTY, END, START};
use crate::error::{Result, TraceError};

/// Sparse map of maze cells. Holds exactly one `@` and exactly one `x`.
#[derive(Clone, Debug)]
pub struct PositionMap {
    cells: HashMap<Position, char>,
    /// Non-marker cells in row-major scan order.
    interior: Vec<Position>,
    start: Position,
    end: Position,
}

impl PositionMap {
    /// Scan `grid` row-major, skipping spaces. The first unrecognized character
    /// aborts the scan; marker counts are checked once the scan completes.
    pub fn build(grid: &Grid) -> Result<Self> {
        let mut cells = HashMap::new();
        let mut interior = Vec::new();
        let mut starts = Vec::new();
        let mut ends = Vec::new();

        for (row, line) in grid.rows().iter().enumerate() {
            for (col, &ch) in line.iter().enumerate() {
                if ch == EMPTY {
                    continue;
                }
                let pos = Position::new(row, col);
                if !is_valid_cell(ch) {
                    return Err(TraceError::MalformedGrid { pos, ch });
                }
                match ch {
                    START => starts.push(pos),
                    END => ends.push(pos),
                    _ => interior.push(pos),
                }
                cells.insert(pos, ch);
            }
        }

        match (starts.as_slice(), ends.as_slice()) {
            (&[start], &[end]) => Ok(Self {
                cells,
                interior,
                start,
                end,
            }),
            _ => Err(TraceError::InvalidMarkerCount {
                starts: starts.len(),
                ends: ends.len(),
            }),
        }
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells.get(&pos).copied()
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains_key(&pos)
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Position {
        self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Never true for a validated map; both markers are always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Entries with `@` first, interior cells row-major, and `x` last.
    pub fn entries(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        std::iter::once(self.start)
            .chain(self.interior.iter().copied())
            .chain(std::iter::once(self.end))
            .filter_map(move |p| self.get(p).map(|ch| (p, ch)))
    }
}

/// Shape check (strict mode only) followed by `PositionMap::build`.
pub fn validate(grid: &Grid, row_width: RowWidth) -> Result<PositionMap> {
    if row_width == RowWidth::Strict {
        let expected = grid.first_row_width();
        if let Some((row, r)) = grid
            .rows()
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != expected)
        {
            return Err(TraceError::RaggedGrid {
                row,
                len: r.len(),
                expected,
            });
        }
    }
    let map = PositionMap::build(grid)?;
    tracing::debug!(
        cells = map.len(),
        start = %map.start(),
        end = %map.end(),
        "grid validated"
    );
    Ok(map)
}
