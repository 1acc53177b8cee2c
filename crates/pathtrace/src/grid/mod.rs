//! Raw maze grids and their validated sparse form.
//!
//! - `Grid`: rows of characters as supplied by the caller (rows may be ragged).
//! - `Position`: `(row, col)` cell address.
//! - `PositionMap`: only the cells that belong to the maze, with the unique
//!   start and end cached. Built once per trace, read-only afterwards.
//!
//! Column bounds follow the first row's width unless `RowWidth::Strict` is
//! requested, in which case ragged grids are rejected up front.

mod map;
mod types;

pub use map::{validate, PositionMap};
pub use types::{Grid, Position, RowWidth};

/// Start marker.
pub const START: char = '@';
/// End marker; terminal, no outgoing transitions.
pub const END: char = 'x';
pub const HORIZONTAL: char = '-';
pub const VERTICAL: char = '|';
/// Turn or junction.
pub const JUNCTION: char = '+';
/// Empty cell; never part of the maze.
pub const EMPTY: char = ' ';

/// Waypoint letters are ASCII uppercase only.
#[inline]
pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_uppercase()
}

/// Whether a non-empty cell character belongs to the maze alphabet.
#[inline]
pub fn is_valid_cell(ch: char) -> bool {
    matches!(ch, HORIZONTAL | JUNCTION | START | VERTICAL | END) || is_letter(ch)
}
