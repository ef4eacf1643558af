//! Editing session: the live grid, its history, tools and project identity
//!
//! Every user gesture maps to one method here. Edits are atomic: either the
//! new grid is recorded in history, or nothing changes and (for rejected
//! tool/block combinations) an error notification is emitted. Programmatic
//! baselines such as new project, load and import reset history instead of
//! recording into it.

use chrono::Utc;
use std::collections::BTreeMap;
use std::path::Path;

use crate::algorithm::flood::flood_fill;
use crate::algorithm::history::History;
use crate::algorithm::region::fill_region;
use crate::catalog::RecentBlocks;
use crate::catalog::blocks::{ERASER_ID, default_block, find_block, is_placeable};
use crate::editor::notification::{Notification, NotificationSink};
use crate::editor::tool::Tool;
use crate::io::configuration::{
    DEFAULT_PROJECT_NAME, GRID_DEFAULT_COLS, GRID_DEFAULT_ROWS, MAX_GRID_DIMENSION,
};
use crate::io::error::file_system;
use crate::io::image::export_grid_as_png;
use crate::io::project::{Project, export_file_name, image_file_name, parse_import};
use crate::io::store::ProjectStore;
use crate::spatial::{BlockGrid, SelectionArea, SelectionTracker};

fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        DEFAULT_PROJECT_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Live editor state for one open project
#[derive(Debug)]
pub struct EditorSession<S: NotificationSink> {
    history: History,
    selection: SelectionTracker,
    tool: Tool,
    selected_block: Option<String>,
    recent_blocks: RecentBlocks,
    project_name: String,
    /// Record of the current identity as last saved or loaded
    saved: Option<Project>,
    sink: S,
}

impl<S: NotificationSink> EditorSession<S> {
    /// Open an untitled default-sized project
    pub fn new(sink: S) -> Self {
        let grid = BlockGrid::new(GRID_DEFAULT_ROWS, GRID_DEFAULT_COLS);
        Self {
            selection: SelectionTracker::new(grid.rows(), grid.cols()),
            history: History::new(grid),
            tool: Tool::Draw,
            selected_block: Some(default_block().id.to_string()),
            recent_blocks: RecentBlocks::new(),
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            saved: None,
            sink,
        }
    }

    /// Seed the recently used block list, typically from the store
    #[must_use]
    pub fn with_recent_blocks(mut self, recent_blocks: RecentBlocks) -> Self {
        self.recent_blocks = recent_blocks;
        self
    }

    // --- read access -------------------------------------------------------

    /// Grid currently displayed
    pub fn grid(&self) -> &BlockGrid {
        self.history.current()
    }

    /// Undo/redo history
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Current selection rectangle, normalized
    pub fn selection(&self) -> Option<SelectionArea> {
        self.selection.area()
    }

    /// Whether a selection drag is in progress
    pub const fn is_selecting(&self) -> bool {
        self.selection.is_dragging()
    }

    /// Active tool
    pub const fn tool(&self) -> Tool {
        self.tool
    }

    /// Selected palette entry, possibly the eraser
    pub fn selected_block(&self) -> Option<&str> {
        self.selected_block.as_deref()
    }

    /// Recently used blocks, most recent first
    pub const fn recent_blocks(&self) -> &RecentBlocks {
        &self.recent_blocks
    }

    /// Display name of the open project
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Store identifier of the open project, if it has been saved or loaded
    pub fn project_id(&self) -> Option<&str> {
        self.saved.as_ref().map(|project| project.id.as_str())
    }

    /// Whether `undo` would change the grid
    pub const fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether `redo` would change the grid
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of non-air cells
    pub fn total_area(&self) -> usize {
        self.grid().filled_count()
    }

    /// Cells per block id
    pub fn block_counts(&self) -> BTreeMap<String, usize> {
        self.grid().block_counts()
    }

    /// Notification sink
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable notification sink
    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Close the session, returning its sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Whether the grid differs from what was last saved
    ///
    /// Modified when history has moved past the baseline and the grid is not
    /// empty; or, for a saved project, when the grid differs from the saved
    /// record; or, for an unsaved project, when any cell is filled.
    pub fn has_unsaved_changes(&self) -> bool {
        let area = self.total_area();
        if !self.history.is_at_baseline() && area > 0 {
            return true;
        }
        match &self.saved {
            Some(saved) => saved.grid != self.grid().to_rows(),
            None => area > 0,
        }
    }

    // --- internals ---------------------------------------------------------

    fn notify(&mut self, notification: Notification) {
        self.sink.notify(notification);
    }

    /// Block written by draw: `None` while erasing
    fn block_to_place(&self) -> Option<&str> {
        if self.tool == Tool::Erase {
            None
        } else {
            self.concrete_block()
        }
    }

    /// Selected block if it is a real block rather than the eraser
    fn concrete_block(&self) -> Option<&str> {
        self.selected_block
            .as_deref()
            .filter(|&id| is_placeable(id))
    }

    fn commit(&mut self, grid: BlockGrid, action: &str) -> bool {
        let recorded = self.history.record(grid);
        if recorded {
            log::debug!(
                "{action}: history at {}/{}",
                self.history.pointer() + 1,
                self.history.len()
            );
        }
        recorded
    }

    fn install_baseline(&mut self, grid: BlockGrid) {
        self.selection.reset(grid.rows(), grid.cols());
        self.history.reset(grid);
    }

    // --- cell editing ------------------------------------------------------

    /// Apply the active tool to a cell
    ///
    /// Out-of-bounds cells and the select tool are ignored silently. Fill
    /// without a concrete block is rejected with an error notification.
    /// Returns whether the grid changed.
    pub fn activate_cell(&mut self, row: usize, col: usize) -> bool {
        if !self.grid().contains(row, col) || self.tool == Tool::SelectArea {
            return false;
        }

        if self.tool == Tool::Fill {
            let Some(block) = self.concrete_block() else {
                self.notify(Notification::error(
                    "Cannot use fill tool with Eraser. Select a block.",
                ));
                return false;
            };
            let Some(fill) = flood_fill(self.grid(), row, col, Some(block)) else {
                return false;
            };
            return self.commit(fill.grid, "flood fill");
        }

        let Some(next) = self.grid().set_cell(row, col, self.block_to_place()) else {
            return false;
        };
        self.commit(next, "place")
    }

    // --- selection ---------------------------------------------------------

    /// Pointer-down with the select tool: anchor a new rectangle
    pub fn begin_selection(&mut self, row: usize, col: usize) {
        if self.tool == Tool::SelectArea {
            self.selection.begin(row, col);
        }
    }

    /// Pointer-move while dragging: move the free corner
    pub fn update_selection(&mut self, row: usize, col: usize) {
        if self.tool == Tool::SelectArea {
            self.selection.update(row, col);
        }
    }

    /// Pointer-up: complete the rectangle
    pub fn end_selection(&mut self) -> Option<SelectionArea> {
        if self.tool == Tool::SelectArea {
            self.selection.finish()
        } else {
            None
        }
    }

    /// Drop the selection rectangle
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Escape key: abort a drag or drop a completed rectangle
    pub fn cancel(&mut self) {
        if self.selection.is_active() {
            self.selection.clear();
        }
    }

    /// Overwrite the selected rectangle with the selected block
    ///
    /// Rejected with an error notification when there is no rectangle or the
    /// selected block is the eraser. Returns whether the fill was applied.
    pub fn fill_selection(&mut self) -> bool {
        let (Some(area), Some(block)) = (self.selection.area(), self.concrete_block()) else {
            self.notify(Notification::error(
                "No area selected or no block chosen for fill.",
            ));
            return false;
        };

        let (grid, covered) = fill_region(self.grid(), &area, block);
        log::debug!("Selection fill covered {covered} cells");
        self.commit(grid, "selection fill");
        self.notify(Notification::success("Selected area filled."));
        true
    }

    // --- history -----------------------------------------------------------

    /// Step back one edit; returns whether the grid changed
    pub fn undo(&mut self) -> bool {
        if self.history.undo().is_none() {
            return false;
        }
        self.selection.clear();
        true
    }

    /// Step forward one edit; returns whether the grid changed
    pub fn redo(&mut self) -> bool {
        if self.history.redo().is_none() {
            return false;
        }
        self.selection.clear();
        true
    }

    // --- palette and tools -------------------------------------------------

    /// Choose a palette entry
    ///
    /// Outside the select tool, choosing the eraser switches to the erase tool
    /// and choosing a block while erasing switches back to draw. Unknown ids
    /// are rejected.
    pub fn select_block(&mut self, id: &str) -> bool {
        if find_block(id).is_none() {
            self.notify(Notification::error(format!("Unknown block \"{id}\".")));
            return false;
        }

        self.selected_block = Some(id.to_string());
        if self.tool != Tool::SelectArea {
            if id == ERASER_ID {
                self.tool = Tool::Erase;
            } else if self.tool == Tool::Erase {
                self.tool = Tool::Draw;
            }
        }
        self.recent_blocks.touch(id);
        true
    }

    /// Switch tools
    ///
    /// Erase selects the eraser; leaving erase for anything but select picks
    /// the first palette block again. Any tool other than select clears the
    /// selection.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        if tool == Tool::Erase {
            self.selected_block = Some(ERASER_ID.to_string());
        } else if tool != Tool::SelectArea && self.selected_block.as_deref() == Some(ERASER_ID) {
            self.selected_block = Some(default_block().id.to_string());
        }
        if tool != Tool::SelectArea {
            self.selection.clear();
        }
    }

    // --- whole-grid operations ---------------------------------------------

    /// Ask to clear the grid; `true` means a confirmation should be shown
    pub fn request_clear(&mut self) -> bool {
        if self.total_area() > 0 {
            return true;
        }
        self.notify(Notification::info("Grid is already empty."));
        false
    }

    /// Replace the grid with air, as an undoable edit
    pub fn clear_grid(&mut self) {
        let cleared = self.grid().cleared();
        self.commit(cleared, "clear");
        self.selection.clear();
        self.notify(Notification::info("Grid cleared."));
    }

    /// Start a fresh project, discarding history
    ///
    /// Dimensions must lie in `1..=MAX_GRID_DIMENSION`. A blank name becomes
    /// the default project name.
    pub fn start_new_project(&mut self, name: &str, rows: usize, cols: usize) -> bool {
        let valid = 1..=MAX_GRID_DIMENSION;
        if !valid.contains(&rows) || !valid.contains(&cols) {
            self.notify(Notification::error(format!(
                "Grid dimensions must be between 1 and {MAX_GRID_DIMENSION}."
            )));
            return false;
        }

        let name = normalize_name(name);
        self.install_baseline(BlockGrid::new(rows, cols));
        self.saved = None;
        log::info!("New project \"{name}\" ({rows}x{cols})");
        self.notify(Notification::success(format!(
            "New project \"{name}\" created."
        )));
        self.project_name = name;
        true
    }

    /// Replace the live grid with a copy of a saved project
    pub fn load_project(&mut self, project: &Project) -> bool {
        match project.block_grid() {
            Ok(grid) => {
                self.install_baseline(grid);
                self.project_name.clone_from(&project.name);
                self.saved = Some(project.clone());
                log::info!("Loaded project {} \"{}\"", project.id, project.name);
                self.notify(Notification::success(format!(
                    "Project \"{}\" loaded.",
                    project.name
                )));
                true
            }
            Err(e) => {
                self.notify(Notification::error(format!("Failed to load project: {e}")));
                false
            }
        }
    }

    /// Load a project by identifier from the store
    pub fn load_from_store(&mut self, store: &ProjectStore, id: &str) -> bool {
        match store.get(id) {
            Ok(project) => self.load_project(project),
            Err(err) => {
                log::debug!("{err}");
                self.notify(Notification::error(
                    "Error: Could not find project to load.",
                ));
                false
            }
        }
    }

    /// Save the live grid under `name`
    ///
    /// Updates the stored record of the current identity in place, or creates
    /// a new record and adopts its identifier.
    pub fn save_to(&mut self, store: &mut ProjectStore, name: &str) -> bool {
        let name = normalize_name(name);
        let now = Utc::now();
        let (rows, cols) = self.grid().dimensions();
        let grid = self.grid().to_rows();

        let project = match self.saved.as_ref().and_then(|saved| store.find(&saved.id)) {
            Some(existing) => Project {
                name: name.clone(),
                grid,
                rows,
                cols,
                updated_at: now,
                ..existing.clone()
            },
            None => Project {
                id: Project::generate_id(now),
                name: name.clone(),
                grid,
                rows,
                cols,
                created_at: now,
                updated_at: now,
            },
        };

        if let Err(e) = store.upsert(project.clone()) {
            self.notify(Notification::error(format!("Failed to save project: {e}")));
            return false;
        }

        log::info!("Saved project {} \"{name}\"", project.id);
        self.saved = Some(project);
        self.notify(Notification::success(format!("Project \"{name}\" saved!")));
        self.project_name = name;
        true
    }

    /// Delete a stored project; deleting the open one starts a new project
    pub fn delete_from_store(&mut self, store: &mut ProjectStore, id: &str) -> bool {
        match store.remove(id) {
            Ok(Some(removed)) => {
                if self.project_id() == Some(id) {
                    self.start_new_project(
                        DEFAULT_PROJECT_NAME,
                        GRID_DEFAULT_ROWS,
                        GRID_DEFAULT_COLS,
                    );
                }
                log::info!("Deleted project {id}");
                self.notify(Notification::info(format!(
                    "Project \"{}\" deleted.",
                    removed.name
                )));
                true
            }
            Ok(None) => {
                self.notify(Notification::error(
                    "Error: Could not find project to delete.",
                ));
                false
            }
            Err(e) => {
                self.notify(Notification::error(format!(
                    "Failed to delete project: {e}"
                )));
                false
            }
        }
    }

    /// Replace the live grid with an imported project document
    ///
    /// Malformed documents are rejected with a descriptive notification and
    /// leave the grid and history untouched. The import has no identity until
    /// it is saved.
    pub fn import_json(&mut self, json: &str) -> bool {
        match parse_import(json) {
            Ok(imported) => {
                self.install_baseline(imported.grid);
                self.saved = None;
                log::info!("Imported project \"{}\"", imported.name);
                self.notify(Notification::success(format!(
                    "Project \"{}\" imported successfully.",
                    imported.name
                )));
                self.project_name = imported.name;
                true
            }
            Err(e) => {
                self.notify(Notification::error(format!(
                    "Failed to import project: {e}"
                )));
                false
            }
        }
    }

    /// Snapshot the live grid as a project record for export
    pub fn export_project(&self) -> Project {
        let now = Utc::now();
        let (rows, cols) = self.grid().dimensions();
        Project {
            id: self.saved.as_ref().map_or_else(
                || format!("export_{}", now.timestamp_millis()),
                |saved| saved.id.clone(),
            ),
            name: self.project_name.clone(),
            grid: self.grid().to_rows(),
            rows,
            cols,
            created_at: self.saved.as_ref().map_or(now, |saved| saved.created_at),
            updated_at: now,
        }
    }

    /// Suggested file name for a JSON export
    pub fn export_file_name(&self) -> String {
        export_file_name(&self.project_name)
    }

    /// Suggested file name for a PNG export
    pub fn image_file_name(&self) -> String {
        image_file_name(&self.project_name)
    }

    /// Write the live grid as a pretty-printed project document
    pub fn export_json(&mut self, output_path: &Path) -> bool {
        let written = self
            .export_project()
            .to_json_pretty()
            .and_then(|json| {
                std::fs::write(output_path, json).map_err(file_system(output_path, "write"))
            });

        match written {
            Ok(()) => {
                self.notify(Notification::success("Project exported as JSON."));
                true
            }
            Err(e) => {
                self.notify(Notification::error(format!(
                    "Failed to export project: {e}"
                )));
                false
            }
        }
    }

    /// Render the live grid to a PNG file
    pub fn export_png(&mut self, output_path: &Path, cell_size: u32) -> bool {
        match export_grid_as_png(self.grid(), cell_size, output_path) {
            Ok(()) => {
                self.notify(Notification::success("PNG exported successfully!"));
                true
            }
            Err(e) => {
                self.notify(Notification::error(format!(
                    "Error exporting to PNG: {e}"
                )));
                false
            }
        }
    }
}
