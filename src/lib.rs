//! Grid-based block planner: place, fill and select blocks on a 2D layer
//!
//! The engine keeps an undoable history of grid snapshots, validates and
//! persists projects as JSON documents, and renders blueprints to PNG.

#![forbid(unsafe_code)]

/// Flood fill, selection fill and undo/redo history
pub mod algorithm;
/// Block catalog and recently used blocks
pub mod catalog;
/// Editing session, tools and notifications
pub mod editor;
/// Input/output operations and error handling
pub mod io;
/// Block grid and selection rectangles
pub mod spatial;

pub use io::error::{PlannerError, Result};
