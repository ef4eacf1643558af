//! Unconditional fill of a rectangular selection

use crate::spatial::{BlockGrid, SelectionArea};

/// Overwrite every cell of `area` with `value`
///
/// Bounds are inclusive and clipped to the grid; cells outside the grid are
/// skipped. Prior cell contents are irrelevant, unlike flood fill.
/// Returns the new grid and how many cells the clipped rectangle covered.
pub fn fill_region(grid: &BlockGrid, area: &SelectionArea, value: &str) -> (BlockGrid, usize) {
    let area = area.normalized();
    let mut next = grid.clone();
    if area.start_row >= grid.rows() || area.start_col >= grid.cols() {
        return (next, 0);
    }

    let clipped = SelectionArea::spanning(
        (area.start_row, area.start_col),
        (
            area.end_row.min(grid.rows() - 1),
            area.end_col.min(grid.cols() - 1),
        ),
    );
    for ((row, col), cell) in next.cells_mut().indexed_iter_mut() {
        if clipped.contains(row, col) {
            *cell = Some(value.to_string());
        }
    }

    (next, clipped.cell_count())
}
