//! Rectangular area selection and the drag gesture that produces it

/// Axis-aligned rectangle of grid cells with inclusive bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionArea {
    /// First selected row
    pub start_row: usize,
    /// First selected column
    pub start_col: usize,
    /// Last selected row (inclusive)
    pub end_row: usize,
    /// Last selected column (inclusive)
    pub end_col: usize,
}

impl SelectionArea {
    /// Rectangle spanned by two arbitrary corners, normalized so start ≤ end
    pub fn spanning(a: (usize, usize), b: (usize, usize)) -> Self {
        Self {
            start_row: a.0.min(b.0),
            start_col: a.1.min(b.1),
            end_row: a.0.max(b.0),
            end_col: a.1.max(b.1),
        }
    }

    /// Copy with start and end swapped where needed
    pub fn normalized(&self) -> Self {
        Self::spanning(
            (self.start_row, self.start_col),
            (self.end_row, self.end_col),
        )
    }

    /// Check if a cell lies inside the rectangle
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.start_row && row <= self.end_row && col >= self.start_col && col <= self.end_col
    }

    /// Number of cells covered
    pub const fn cell_count(&self) -> usize {
        (self.end_row - self.start_row + 1) * (self.end_col - self.start_col + 1)
    }
}

/// Clamp a coordinate to `[0, rows-1] × [0, cols-1]`
const fn clamp_to(rows: usize, cols: usize, row: usize, col: usize) -> (usize, usize) {
    let max_row = rows.saturating_sub(1);
    let max_col = cols.saturating_sub(1);
    (
        if row > max_row { max_row } else { row },
        if col > max_col { max_col } else { col },
    )
}

/// Phase of the selection gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectionState {
    /// No gesture in progress; a completed rectangle may be retained
    Idle { area: Option<SelectionArea> },
    /// Pointer held down: anchor fixed, corner follows the pointer
    Dragging {
        anchor: (usize, usize),
        corner: (usize, usize),
    },
}

/// Tracks the drag-to-select gesture
///
/// `idle → dragging → idle`: pointer-down records the anchor, pointer moves
/// drag the free corner, pointer-up normalizes and keeps the rectangle until
/// it is cleared. Coordinates are clamped to the grid extents given at
/// construction; a grid with zero rows or columns never yields a rectangle.
#[derive(Debug, Clone)]
pub struct SelectionTracker {
    state: SelectionState,
    rows: usize,
    cols: usize,
}

impl SelectionTracker {
    /// Create an idle tracker for a grid of the given size
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self {
            state: SelectionState::Idle { area: None },
            rows,
            cols,
        }
    }

    /// Start a drag at a cell, discarding any previous rectangle
    ///
    /// A grid without cells has nothing to select, so the tracker stays idle.
    pub fn begin(&mut self, row: usize, col: usize) {
        if self.rows == 0 || self.cols == 0 {
            self.clear();
            return;
        }
        let anchor = clamp_to(self.rows, self.cols, row, col);
        self.state = SelectionState::Dragging {
            anchor,
            corner: anchor,
        };
    }

    /// Move the free corner; ignored unless a drag is in progress
    pub fn update(&mut self, row: usize, col: usize) {
        let position = clamp_to(self.rows, self.cols, row, col);
        if let SelectionState::Dragging { corner, .. } = &mut self.state {
            *corner = position;
        }
    }

    /// Complete the drag, retaining the normalized rectangle
    ///
    /// Returns the rectangle, or `None` when no drag was in progress.
    pub fn finish(&mut self) -> Option<SelectionArea> {
        match self.state {
            SelectionState::Dragging { anchor, corner } => {
                let area = SelectionArea::spanning(anchor, corner);
                self.state = SelectionState::Idle { area: Some(area) };
                Some(area)
            }
            SelectionState::Idle { .. } => None,
        }
    }

    /// Drop any rectangle and abort a drag in progress
    pub fn clear(&mut self) {
        self.state = SelectionState::Idle { area: None };
    }

    /// Clear and adopt new grid extents
    pub fn reset(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.clear();
    }

    /// Current rectangle, always normalized
    pub fn area(&self) -> Option<SelectionArea> {
        match self.state {
            SelectionState::Idle { area } => area,
            SelectionState::Dragging { anchor, corner } => {
                Some(SelectionArea::spanning(anchor, corner))
            }
        }
    }

    /// Whether a drag gesture is in progress
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, SelectionState::Dragging { .. })
    }

    /// Whether a rectangle exists or is being dragged
    pub const fn is_active(&self) -> bool {
        !matches!(self.state, SelectionState::Idle { area: None })
    }
}
