//! Typed trace failures.
//!
//! Every variant collapses to the same flat `Error` token at the output
//! boundary (see `trace::format_outcome`); the distinction is kept for logs
//! and diagnostics.

use crate::grid::Position;

/// Result alias for tracing operations.
pub type Result<T> = std::result::Result<T, TraceError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    /// A non-space cell holds a character outside the maze alphabet.
    #[error("unrecognized character {ch:?} at {pos}")]
    MalformedGrid { pos: Position, ch: char },

    /// The grid must contain exactly one `@` and exactly one `x`.
    #[error("expected exactly one start and one end marker, found {starts} '@' and {ends} 'x'")]
    InvalidMarkerCount { starts: usize, ends: usize },

    /// The grid is well formed but no legal walk connects start to end.
    #[error("no path from start to end")]
    NoPathFound,

    /// Strict row-width mode only: a row differs in length from the first row.
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        len: usize,
        expected: usize,
    },
}
