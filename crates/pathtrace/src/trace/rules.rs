//! Character-pair transition table.
//!
//! - from `@`, `-`, `|`, `+`, or an uppercase letter: onto `-`, `|`, `+`,
//!   `x`, or any uppercase letter;
//! - from `x`: nowhere.
//!
//! Legality is purely per character pair. A `-` does not restrict motion to
//! horizontal neighbors; direction falls out of which neighbors exist and are
//! still unvisited. `@` is never a legal target.

use crate::grid::{is_letter, END, HORIZONTAL, JUNCTION, START, VERTICAL};

#[inline]
fn is_enterable(next: char) -> bool {
    matches!(next, HORIZONTAL | VERTICAL | JUNCTION | END) || is_letter(next)
}

/// Whether the walk may step from a cell holding `current` onto `next`.
#[inline]
pub fn is_valid_next(current: char, next: char) -> bool {
    match current {
        START | HORIZONTAL | VERTICAL | JUNCTION => is_enterable(next),
        c if is_letter(c) => is_enterable(next),
        // END is terminal; anything else is not a maze cell.
        _ => false,
    }
}
