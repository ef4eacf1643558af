//! Block placement matrix and its mutation primitives
//!
//! A `BlockGrid` is a fixed-size `rows × cols` matrix where every cell is either
//! air (`None`) or a block identifier. Dimensions never change for a grid value;
//! resizing means building a new grid. Edits produce new grids so that history
//! snapshots stay immutable.

use ndarray::Array2;
use std::collections::BTreeMap;

use crate::catalog::blocks::ERASER_ID;
use crate::io::error::{PlannerError, Result};

/// Rectangular matrix of optional block identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockGrid {
    cells: Array2<Option<String>>,
}

impl BlockGrid {
    /// Create a grid filled with air
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), None),
        }
    }

    /// Build a grid from row-major nested vectors
    ///
    /// # Errors
    ///
    /// Returns an error if the rows do not all have the same length
    pub fn from_rows(rows: Vec<Vec<Option<String>>>) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);

        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != col_count)
        {
            return Err(PlannerError::InvalidGrid {
                reason: format!(
                    "Grid row {index} has {} cells, expected {col_count}",
                    row.len()
                ),
            });
        }

        let cells = Array2::from_shape_vec(
            (row_count, col_count),
            rows.into_iter().flatten().collect(),
        )
        .map_err(|e| PlannerError::InvalidGrid {
            reason: e.to_string(),
        })?;

        Ok(Self { cells })
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Get the number of columns in the grid
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Check if a coordinate lies inside the grid
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols()
    }

    /// Block stored at a coordinate, `None` for air or out-of-bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get((row, col)).and_then(Option::as_deref)
    }

    /// Return a copy of the grid with one cell replaced
    ///
    /// Yields `None` when the coordinate is outside the grid or the cell
    /// already holds `value`, so callers never record a no-op edit.
    pub fn set_cell(&self, row: usize, col: usize, value: Option<&str>) -> Option<Self> {
        let current = self.cells.get((row, col))?;
        if current.as_deref() == value {
            return None;
        }

        let mut next = self.clone();
        next.write(row, col, value);
        Some(next)
    }

    /// Overwrite a cell in place, reporting whether it changed
    pub(crate) fn write(&mut self, row: usize, col: usize, value: Option<&str>) -> bool {
        match self.cells.get_mut((row, col)) {
            Some(cell) if cell.as_deref() != value => {
                *cell = value.map(str::to_string);
                true
            }
            _ => false,
        }
    }

    /// Read-only view of the underlying matrix
    pub const fn cells(&self) -> &Array2<Option<String>> {
        &self.cells
    }

    pub(crate) const fn cells_mut(&mut self) -> &mut Array2<Option<String>> {
        &mut self.cells
    }

    /// Number of non-air cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Whether every cell is air
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Per-block cell counts, ordered by block id
    pub fn block_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for id in self.cells.iter().flatten() {
            if id != ERASER_ID {
                *counts.entry(id.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Iterate non-air cells as ((row, col), block id)
    pub fn filled_cells(&self) -> impl Iterator<Item = ((usize, usize), &str)> {
        self.cells
            .indexed_iter()
            .filter_map(|(position, cell)| cell.as_deref().map(|id| (position, id)))
    }

    /// An all-air grid with the same dimensions
    pub fn cleared(&self) -> Self {
        Self::new(self.rows(), self.cols())
    }

    /// Convert to row-major nested vectors for serialization
    pub fn to_rows(&self) -> Vec<Vec<Option<String>>> {
        self.cells.outer_iter().map(|row| row.to_vec()).collect()
    }
}
