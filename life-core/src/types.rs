/// Index of a cell in a [`crate::grid::Generation`] buffer.
///
/// Cells are stored row-major, so the cell at `(x, y)` lives at index
/// `x + y * GRID_WIDTH`. An index is only meaningful for buffers of the
/// fixed size given by [`crate::config::CELL_COUNT`].
pub type CellIndex = usize;
