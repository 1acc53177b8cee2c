//! Copy-on-branch recursive search (reference behavior).
//!
//! Each recursive call owns its own visited list, letters, and path, cloned
//! from the parent at fan-out. No undo logic is needed. Recursion depth is
//! bounded by the number of maze cells, so very large mazes should use the
//! stack engine instead.

use crate::error::{Result, TraceError};
use crate::grid::{is_letter, Position, PositionMap, END, START};

use super::adjacency::adjacent_positions;
use super::rules::is_valid_next;
use super::Trace;

/// Run the recursive reference search from the map's start cell.
pub fn search_recursive(map: &PositionMap, rows: usize, cols: usize) -> Result<Trace> {
    let walker = Walker { map, rows, cols };
    walker
        .walk(map.start(), START, Vec::new(), Vec::new(), Vec::new())
        .ok_or(TraceError::NoPathFound)
}

struct Walker<'a> {
    map: &'a PositionMap,
    rows: usize,
    cols: usize,
}

impl Walker<'_> {
    fn walk(
        &self,
        pos: Position,
        ch: char,
        mut visited: Vec<Position>,
        mut letters: Vec<char>,
        mut path: Vec<char>,
    ) -> Option<Trace> {
        path.push(ch);
        visited.push(pos);
        if is_letter(ch) {
            letters.push(ch);
        }
        if ch == END {
            return Some(Trace {
                letters: letters.into_iter().collect(),
                path: path.into_iter().collect(),
                positions: visited,
            });
        }

        let next: Vec<(Position, char)> = adjacent_positions(self.rows, self.cols, pos)
            .iter()
            .filter_map(|&n| self.map.get(n).map(|c| (n, c)))
            .filter(|&(n, c)| is_valid_next(ch, c) && !visited.contains(&n))
            .collect();

        next.into_iter()
            .find_map(|(n, c)| self.walk(n, c, visited.clone(), letters.clone(), path.clone()))
    }
}
