use crate::config::{CELL_COUNT, GRID_HEIGHT, GRID_WIDTH};
use crate::types::CellIndex;
use rand::Rng;

/// One generation of the toroidal cell field.
///
/// Cells are stored row-major in a flat buffer of exactly
/// [`CELL_COUNT`] booleans, where `true` means alive. Coordinates
/// passed to [`Generation::get`] and [`Generation::set`] are normalized
/// by toroidal wraparound before indexing, so a coordinate one step
/// outside the grid addresses the opposite edge instead of reading out
/// of bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// Flat row-major cell storage; always [`CELL_COUNT`] entries.
    pub cells: Vec<bool>,
}

/// Normalizes a coordinate pair into a flat row-major index.
///
/// Wraparound is a single conditional step, not modulo: `x < 0` maps to
/// `GRID_WIDTH - 1` and `x > GRID_WIDTH - 1` maps to `0`, same for `y`.
/// Callers only ever probe offsets of -1, 0 or +1 from an in-range
/// coordinate, which is exactly the range a single step covers.
#[inline]
fn wrap_index(x: i32, y: i32) -> CellIndex {
    let x = if x < 0 {
        GRID_WIDTH - 1
    } else if x > GRID_WIDTH - 1 {
        0
    } else {
        x
    };

    let y = if y < 0 {
        GRID_HEIGHT - 1
    } else if y > GRID_HEIGHT - 1 {
        0
    } else {
        y
    };

    (x + y * GRID_WIDTH) as CellIndex
}

impl Generation {
    /// Creates an all-dead generation of [`CELL_COUNT`] cells.
    pub fn new() -> Self {
        Self {
            cells: vec![false; CELL_COUNT],
        }
    }

    /// Returns the liveness of the cell at `(x, y)`.
    ///
    /// The coordinates are wrapped toroidally before indexing, so
    /// `get(-1, y)` reads the last column and `get(GRID_WIDTH, y)`
    /// reads the first. Total for any probe within one cell of the
    /// grid; there are no error conditions.
    ///
    /// ### Parameters
    /// - `x`, `y` - Cell coordinate, at most one step outside the grid.
    ///
    /// ### Returns
    /// `true` if the cell at the wrapped coordinate is alive.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.cells[wrap_index(x, y)]
    }

    /// Sets the liveness of the cell at `(x, y)`.
    ///
    /// Uses the same wraparound normalization as [`Generation::get`]
    /// and mutates only this buffer.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, alive: bool) {
        self.cells[wrap_index(x, y)] = alive;
    }

    /// Kills every cell, leaving the buffer length unchanged.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = false;
        }
    }

    /// Sets every cell independently to a uniformly random state.
    ///
    /// Used for the initial board and for manual reseeding.
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        for cell in &mut self.cells {
            *cell = rng.random();
        }
    }

    /// Number of live cells in this generation.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

impl Default for Generation {
    fn default() -> Self {
        Self::new()
    }
}
