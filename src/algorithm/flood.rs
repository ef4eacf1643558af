//! Contiguous region fill over 4-connected cells

use bitvec::prelude::*;
use std::collections::VecDeque;

use crate::spatial::BlockGrid;

/// Up, down, left and right
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Result of a flood fill that changed at least one cell
#[derive(Debug, Clone)]
pub struct FloodFill {
    /// Grid after the fill
    pub grid: BlockGrid,
    /// Number of cells that were replaced
    pub filled_cells: usize,
}

/// In-bounds orthogonal neighbors of a cell
fn neighbors(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> impl Iterator<Item = (usize, usize)> {
    NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < rows && c < cols).then_some((r, c))
    })
}

/// Replace the 4-connected region sharing the seed's value
///
/// Breadth-first from the seed. The target value is captured before any
/// mutation and every dequeued cell is compared against it using its current
/// value in the working copy. A visited bit per cell guarantees each cell is
/// enqueued at most once, so the cost is O(rows × cols).
///
/// Returns `None` when the seed is outside the grid or already holds
/// `replacement`; such fills must not be recorded.
pub fn flood_fill(
    grid: &BlockGrid,
    row: usize,
    col: usize,
    replacement: Option<&str>,
) -> Option<FloodFill> {
    let target = grid.cells().get((row, col))?.clone();
    if target.as_deref() == replacement {
        return None;
    }

    let (rows, cols) = grid.dimensions();
    let mut working = grid.clone();
    let mut visited = bitvec![0; rows * cols];
    let mut queue = VecDeque::from([(row, col)]);
    visited.set(row * cols + col, true);

    let mut filled_cells = 0;
    while let Some((r, c)) = queue.pop_front() {
        if working.get(r, c) != target.as_deref() {
            continue;
        }
        working.write(r, c, replacement);
        filled_cells += 1;

        for (nr, nc) in neighbors(r, c, rows, cols) {
            let index = nr * cols + nc;
            if working.get(nr, nc) == target.as_deref()
                && visited.get(index).as_deref() == Some(&false)
            {
                visited.set(index, true);
                queue.push_back((nr, nc));
            }
        }
    }

    log::debug!("Flood fill from ({row}, {col}) replaced {filled_cells} cells");

    (filled_cells > 0).then_some(FloodFill {
        grid: working,
        filled_cells,
    })
}
