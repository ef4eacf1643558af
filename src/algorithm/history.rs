//! Linear undo/redo history of grid snapshots

use crate::spatial::BlockGrid;

/// Snapshot sequence with a cursor at the displayed grid
///
/// The snapshot under the pointer is always the grid being shown. Recording
/// after an undo discards the redo branch. History-driven moves (`undo`,
/// `redo`) never record, and programmatic baselines go through `reset`.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<BlockGrid>,
    pointer: usize,
}

impl History {
    /// Start a history whose only entry is `baseline`
    pub fn new(baseline: BlockGrid) -> Self {
        Self {
            snapshots: vec![baseline],
            pointer: 0,
        }
    }

    /// Snapshot at the pointer
    #[allow(clippy::indexing_slicing)]
    pub fn current(&self) -> &BlockGrid {
        &self.snapshots[self.pointer]
    }

    /// Push a user edit onto the history
    ///
    /// Entries after the pointer are dropped before appending. A grid equal to
    /// the current snapshot is ignored. Returns whether an entry was added.
    pub fn record(&mut self, grid: BlockGrid) -> bool {
        if *self.current() == grid {
            return false;
        }
        self.snapshots.truncate(self.pointer + 1);
        self.snapshots.push(grid);
        self.pointer = self.snapshots.len() - 1;
        true
    }

    /// Step back one entry; `None` at the origin
    pub fn undo(&mut self) -> Option<&BlockGrid> {
        if self.pointer == 0 {
            return None;
        }
        self.pointer -= 1;
        Some(self.current())
    }

    /// Step forward one entry; `None` at the tip
    pub fn redo(&mut self) -> Option<&BlockGrid> {
        if self.pointer + 1 >= self.snapshots.len() {
            return None;
        }
        self.pointer += 1;
        Some(self.current())
    }

    /// Replace the whole history with a single baseline entry
    pub fn reset(&mut self, baseline: BlockGrid) {
        self.snapshots.clear();
        self.snapshots.push(baseline);
        self.pointer = 0;
    }

    /// Whether `undo` would move
    pub const fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    /// Whether `redo` would move
    pub fn can_redo(&self) -> bool {
        self.pointer + 1 < self.snapshots.len()
    }

    /// Index of the displayed snapshot
    pub const fn pointer(&self) -> usize {
        self.pointer
    }

    /// Number of stored snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; a history holds at least its baseline
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Whether the pointer sits on the baseline entry
    pub const fn is_at_baseline(&self) -> bool {
        self.pointer == 0
    }
}
