//! Curated internal API (UNSTABLE).
//!
//! A convenience surface for the CLI, benches, and tests. Breaking changes are
//! allowed; prefer these re-exports for consistency across callers.

// Grid and validation
pub use crate::grid::{is_valid_cell, validate, Grid, Position, PositionMap, RowWidth};
// Search building blocks
pub use crate::trace::{
    adjacent_positions, is_valid_next, search, search_recursive, search_stack, Engine, Neighbors,
};
// Entry points and results
pub use crate::trace::{format_outcome, trace_path, trace_path_with, Trace, TraceCfg};
// Random mazes
pub use crate::rand::{draw_walk_grid, ReplayToken, WalkCfg};
pub use crate::error::{Result, TraceError};
