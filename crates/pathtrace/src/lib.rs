//! Path tracing through ASCII pipe mazes.
//!
//! A maze is a grid of characters: `@` marks the start, `x` the end, `-` and
//! `|` are straight segments, `+` is a turn or junction, and uppercase letters
//! are waypoints that also act as segments. Tracing finds a connected path
//! from `@` to `x` and reports the letters collected on the way together with
//! every character traversed.
//!
//! Layout
//! - `grid`: raw grid, positions, validation into a sparse `PositionMap`.
//! - `trace`: adjacency, transition rules, the backtracking search engines,
//!   and result formatting.
//! - `rand`: deterministic random mazes for benches and property tests.
//!
//! API Policy
//! - The stable entry points are `trace_path`, `trace_path_with`, and
//!   `format_outcome`. Everything else is exposed for tests, benches, and the
//!   CLI and may change.

pub mod api;
pub mod error;
pub mod grid;
pub mod rand;
pub mod trace;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Result, TraceError};
pub use grid::{Grid, Position, PositionMap, RowWidth};
pub use trace::{format_outcome, trace_path, trace_path_with, Engine, Trace, TraceCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::grid::{Grid, Position, PositionMap, RowWidth};
    pub use crate::rand::{draw_walk_grid, ReplayToken, WalkCfg};
    pub use crate::trace::{format_outcome, trace_path, trace_path_with, Engine, Trace, TraceCfg};
    pub use crate::TraceError;
}
