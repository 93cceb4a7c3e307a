/// Number of cell columns in the toroidal grid.
pub const GRID_WIDTH: i32 = 100;

/// Number of cell rows in the toroidal grid.
pub const GRID_HEIGHT: i32 = 100;

/// Number of cells in one generation buffer.
pub const CELL_COUNT: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;
