//! Orthogonal neighbors in fixed up, down, left, right order.

use std::ops::Deref;

use crate::grid::Position;

const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Up to four neighbor positions, stored inline.
#[derive(Clone, Copy, Debug)]
pub struct Neighbors {
    buf: [Position; 4],
    len: usize,
}

impl Neighbors {
    fn empty() -> Self {
        Self {
            buf: [Position::new(0, 0); 4],
            len: 0,
        }
    }

    fn push(&mut self, p: Position) {
        self.buf[self.len] = p;
        self.len += 1;
    }

    /// Keep only positions satisfying `keep`, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(Position) -> bool) {
        let mut out = Self::empty();
        for &p in self.iter() {
            if keep(p) {
                out.push(p);
            }
        }
        *self = out;
    }
}

impl Deref for Neighbors {
    type Target = [Position];

    fn deref(&self) -> &[Position] {
        &self.buf[..self.len]
    }
}

/// In-bounds orthogonal neighbors of `pos` for a `rows × cols` grid.
///
/// The order (up, down, left, right) decides search tie-breaking. `pos`
/// itself need not be in bounds; each neighbor is checked on its own.
pub fn adjacent_positions(rows: usize, cols: usize, pos: Position) -> Neighbors {
    let mut out = Neighbors::empty();
    for (dr, dc) in DIRECTIONS {
        let (Some(row), Some(col)) = (
            pos.row.checked_add_signed(dr),
            pos.col.checked_add_signed(dc),
        ) else {
            continue;
        };
        if row < rows && col < cols {
            out.push(Position::new(row, col));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn interior_cell_has_four_in_fixed_order() {
        let n = adjacent_positions(3, 3, p(1, 1));
        assert_eq!(&*n, &[p(0, 1), p(2, 1), p(1, 0), p(1, 2)]);
    }

    #[test]
    fn corners_and_edges_are_clipped() {
        assert_eq!(&*adjacent_positions(3, 3, p(0, 0)), &[p(1, 0), p(0, 1)]);
        assert_eq!(&*adjacent_positions(3, 3, p(2, 2)), &[p(1, 2), p(2, 1)]);
        assert_eq!(&*adjacent_positions(1, 5, p(0, 2)), &[p(0, 1), p(0, 3)]);
    }

    #[test]
    fn single_cell_grid_is_isolated() {
        assert!(adjacent_positions(1, 1, p(0, 0)).is_empty());
    }

    #[test]
    fn out_of_bounds_origin_only_keeps_in_bounds_neighbors() {
        // A cell past the first row's width in a longer row.
        let n = adjacent_positions(3, 2, p(1, 2));
        assert_eq!(&*n, &[p(1, 1)]);
    }

    #[test]
    fn retain_preserves_order() {
        let mut n = adjacent_positions(3, 3, p(1, 1));
        n.retain(|q| q.row != 0);
        assert_eq!(&*n, &[p(2, 1), p(1, 0), p(1, 2)]);
    }
}
