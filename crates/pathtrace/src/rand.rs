//! Random mazes from self-avoiding walks (replay tokens).
//!
//! Purpose
//! - Deterministic, reproducible mazes for benches, property tests, and the
//!   CLI `gen` subcommand.
//!
//! Model
//! - Pick a start cell, then repeatedly step to a random unvisited orthogonal
//!   neighbor until `max_len` cells are placed or the walk is boxed in.
//! - First cell is `@`, last is `x`. Interior cells are `-`/`|` when the walk
//!   runs straight through them and `+` when it turns; with probability
//!   `letter_prob` an interior cell becomes a random uppercase letter instead.
//! - The walk itself is a legal path, so every generated maze traces. The
//!   traced path may differ from the walk when walk cells touch.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{Grid, Position, EMPTY, END, HORIZONTAL, JUNCTION, START, VERTICAL};
use crate::trace::adjacent_positions;

/// Deterministic RNG seed `(seed, index)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Walk sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct WalkCfg {
    pub rows: usize,
    pub cols: usize,
    /// Upper bound on walk length in cells, markers included. At least 2.
    pub max_len: usize,
    /// Chance that an interior cell is a letter. Clamped to [0, 1].
    pub letter_prob: f64,
}

impl Default for WalkCfg {
    fn default() -> Self {
        Self {
            rows: 16,
            cols: 16,
            max_len: 64,
            letter_prob: 0.1,
        }
    }
}

/// Largest side length `draw_walk_grid` will allocate.
pub const MAX_SIDE: usize = 1024;

/// Clamp each side to `MAX_SIDE`; fewer than two cells widens to 1×2.
fn clamp_dims(rows: usize, cols: usize) -> (usize, usize) {
    let (rows, cols) = (rows.min(MAX_SIDE), cols.min(MAX_SIDE));
    match rows.checked_mul(cols) {
        Some(n) if n >= 2 => (rows, cols),
        _ => (1, 2),
    }
}

/// Draw a rectangular maze of at most `MAX_SIDE` × `MAX_SIDE` cells. Grids with
/// fewer than two cells are widened to 1×2.
pub fn draw_walk_grid(cfg: WalkCfg, tok: ReplayToken) -> Grid {
    let mut rng = tok.to_std_rng();
    let (rows, cols) = clamp_dims(cfg.rows, cfg.cols);
    let max_len = cfg.max_len.max(2);
    let letter_prob = if cfg.letter_prob.is_nan() {
        0.0
    } else {
        cfg.letter_prob.clamp(0.0, 1.0)
    };

    let idx = |p: Position| p.row * cols + p.col;
    let start = Position::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
    let mut seen = vec![false; rows * cols];
    seen[idx(start)] = true;
    let mut walk = vec![start];
    while walk.len() < max_len {
        let Some(&cur) = walk.last() else { break };
        let open: Vec<Position> = adjacent_positions(rows, cols, cur)
            .iter()
            .copied()
            .filter(|&p| !seen[idx(p)])
            .collect();
        if open.is_empty() {
            break;
        }
        let next = open[rng.gen_range(0..open.len())];
        seen[idx(next)] = true;
        walk.push(next);
    }

    let mut cells = vec![vec![EMPTY; cols]; rows];
    let last = walk.len() - 1;
    for (i, p) in walk.iter().enumerate() {
        let ch = if i == 0 {
            START
        } else if i == last {
            END
        } else if rng.gen_bool(letter_prob) {
            char::from(rng.gen_range(b'A'..=b'Z'))
        } else {
            let (prev, next) = (walk[i - 1], walk[i + 1]);
            if prev.row == next.row {
                HORIZONTAL
            } else if prev.col == next.col {
                VERTICAL
            } else {
                JUNCTION
            }
        };
        cells[p.row][p.col] = ch;
    }
    tracing::trace!(rows, cols, len = walk.len(), "walk grid drawn");
    Grid::from_rows(cells)
}
