//! The generation step for Conway's Game of Life.
//!
//! The host loop drives one [`step`] per simulation tick:
//! 1. `next` is cleared to all-dead.
//! 2. Every cell's live neighbors are counted on `current` via
//!    [`count_live_neighbors`].
//! 3. Cells that survive or are born are written alive into `next`;
//!    every other cell stays dead from the pre-clear.
//!
//! The caller then swaps the two buffers, and `next` becomes the new
//! current generation.

use crate::config::{GRID_HEIGHT, GRID_WIDTH};
use crate::grid::Generation;

/// Counts the live cells among the 8 toroidal neighbors of `(x, y)`.
///
/// Neighbors are read through [`Generation::get`], so probes one step
/// past an edge wrap to the opposite edge. The cell itself is never
/// counted.
///
/// ### Parameters
/// - `x`, `y` - Coordinate of the cell whose neighborhood is counted.
/// - `cells` - The generation to read from; only read access is required.
///
/// ### Returns
/// The number of live neighbors, always in `0..=8`.
pub fn count_live_neighbors(x: i32, y: i32, cells: &Generation) -> u8 {
    let mut neighbors = 0;

    // Probe offsets stay within one cell of (x, y), the range the
    // single-step wraparound in the grid covers.
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if cells.get(x + dx, y + dy) {
                neighbors += 1;
            }
        }
    }

    neighbors
}

/// Computes the next generation from the current one.
///
/// `next` is cleared to all-dead first, then for every cell the
/// standard Conway rule is applied:
///
/// - a live cell with 2 or 3 live neighbors stays alive;
/// - a dead cell with exactly 3 live neighbors becomes alive;
/// - every other cell stays dead (nothing is written for it).
///
/// `current` is only read and `next` is only written during the pass,
/// so the caller can keep both buffers allocated for the process
/// lifetime and swap them after each step.
///
/// ### Parameters
/// - `current` - The generation being read.
/// - `next` - The buffer receiving the new generation; its previous
///   contents are discarded by the pre-clear.
pub fn step(current: &Generation, next: &mut Generation) {
    next.clear();

    for y in 0..GRID_HEIGHT {
        for x in 0..GRID_WIDTH {
            let count = count_live_neighbors(x, y, current);
            let alive = current.get(x, y);

            match (alive, count) {
                (true, 2) | (true, 3) => next.set(x, y, true),
                (false, 3) => next.set(x, y, true),
                _ => {}
            }
        }
    }
}
