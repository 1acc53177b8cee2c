//! Explicit-stack depth-first search with shared rollback buffers.
//!
//! One frame per cell on the current walk. Frames hold their filtered
//! candidate list, a cursor into it, and the letter count at entry. Path,
//! positions, and letters live in append-only buffers that are truncated back
//! when a frame is popped, so no branch copies its history.

use std::collections::HashSet;

use crate::error::{Result, TraceError};
use crate::grid::{is_letter, Position, PositionMap, END, START};

use super::adjacency::{adjacent_positions, Neighbors};
use super::rules::is_valid_next;
use super::Trace;

/// Run the explicit-stack search from the map's start cell.
pub fn search_stack(map: &PositionMap, rows: usize, cols: usize) -> Result<Trace> {
    StackRunner::new(map, rows, cols).run()
}

#[derive(Debug)]
struct Frame {
    candidates: Neighbors,
    next: usize,
    letters_mark: usize,
}

struct StackRunner<'a> {
    map: &'a PositionMap,
    rows: usize,
    cols: usize,
    frames: Vec<Frame>,
    path: Vec<char>,
    positions: Vec<Position>,
    letters: Vec<char>,
    on_path: HashSet<Position>,
    backtracks: u64,
}

impl<'a> StackRunner<'a> {
    fn new(map: &'a PositionMap, rows: usize, cols: usize) -> Self {
        Self {
            map,
            rows,
            cols,
            frames: Vec::new(),
            path: Vec::new(),
            positions: Vec::new(),
            letters: Vec::new(),
            on_path: HashSet::new(),
            backtracks: 0,
        }
    }

    fn run(mut self) -> Result<Trace> {
        if self.enter(self.map.start(), START) {
            return Ok(self.finish());
        }
        while let Some(frame) = self.frames.last_mut() {
            if frame.next == frame.candidates.len() {
                self.leave();
                continue;
            }
            let pos = frame.candidates[frame.next];
            frame.next += 1;
            if let Some(ch) = self.map.get(pos) {
                if self.enter(pos, ch) {
                    return Ok(self.finish());
                }
            }
        }
        tracing::debug!(backtracks = self.backtracks, "search exhausted");
        Err(TraceError::NoPathFound)
    }

    /// Step onto `pos`. Returns true when the end marker is reached.
    fn enter(&mut self, pos: Position, ch: char) -> bool {
        let letters_mark = self.letters.len();
        self.path.push(ch);
        self.positions.push(pos);
        self.on_path.insert(pos);
        if is_letter(ch) {
            self.letters.push(ch);
        }
        if ch == END {
            return true;
        }
        let mut candidates = adjacent_positions(self.rows, self.cols, pos);
        candidates.retain(|n| {
            self.map.get(n).is_some_and(|c| is_valid_next(ch, c)) && !self.on_path.contains(&n)
        });
        self.frames.push(Frame {
            candidates,
            next: 0,
            letters_mark,
        });
        false
    }

    /// Pop the top frame and roll every buffer back to its entry state.
    fn leave(&mut self) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        self.letters.truncate(frame.letters_mark);
        self.path.pop();
        if let Some(pos) = self.positions.pop() {
            self.on_path.remove(&pos);
        }
        self.backtracks += 1;
        tracing::trace!(depth = self.frames.len(), "backtrack");
    }

    fn finish(self) -> Trace {
        tracing::debug!(
            steps = self.positions.len(),
            backtracks = self.backtracks,
            "end reached"
        );
        Trace {
            letters: self.letters.into_iter().collect(),
            path: self.path.into_iter().collect(),
            positions: self.positions,
        }
    }
}
