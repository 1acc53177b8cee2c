//! Path search over a validated maze.
//!
//! Starting at `@`, the walk steps onto in-bounds orthogonal neighbors (up,
//! down, left, right) that are maze cells, legal per the transition table, and
//! not already on the current walk. The first branch to reach `x` wins; dead
//! ends backtrack to the next sibling candidate. The result is deterministic
//! for a given grid but not necessarily the shortest path.
//!
//! Engines
//! - `Engine::Stack`: explicit frames over shared buffers with length markers.
//! - `Engine::Recursive`: copy-on-branch recursion; the reference behavior.
//!
//! Both engines return identical results. Worst-case running time is
//! exponential in the number of simple paths for densely connected grids;
//! search depth never exceeds the number of maze cells.

mod adjacency;
mod outcome;
mod reference;
mod rules;
mod stack;

pub use adjacency::{adjacent_positions, Neighbors};
pub use outcome::{format_outcome, ERROR_TOKEN};
pub use reference::search_recursive;
pub use rules::is_valid_next;
pub use stack::search_stack;

use serde::Serialize;

use crate::error::Result;
use crate::grid::{validate, Grid, Position, PositionMap, RowWidth};

/// Search engine selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Engine {
    #[default]
    Stack,
    Recursive,
}

/// Trace configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceCfg {
    pub row_width: RowWidth,
    pub engine: Engine,
}

/// A successful walk from `@` to `x`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Trace {
    /// Uppercase letters in encounter order.
    pub letters: String,
    /// Every traversed character, start and end included.
    pub path: String,
    /// Visited cells; `positions[i]` holds the i-th char of `path`.
    pub positions: Vec<Position>,
}

/// Search an already validated map. `cols` is the column bound for every row.
pub fn search(map: &PositionMap, rows: usize, cols: usize, engine: Engine) -> Result<Trace> {
    tracing::debug!(rows, cols, ?engine, "search start");
    match engine {
        Engine::Stack => search_stack(map, rows, cols),
        Engine::Recursive => search_recursive(map, rows, cols),
    }
}

/// Validate and trace with default configuration.
pub fn trace_path(grid: &Grid) -> Result<Trace> {
    trace_path_with(grid, TraceCfg::default())
}

pub fn trace_path_with(grid: &Grid, cfg: TraceCfg) -> Result<Trace> {
    let map = validate(grid, cfg.row_width)?;
    search(&map, grid.row_count(), grid.first_row_width(), cfg.engine)
}
