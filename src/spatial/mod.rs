//! Spatial data structures for the editing engine
//!
//! This module contains:
//! - The block placement grid and its mutation primitives
//! - Rectangular selections and the drag gesture state machine

/// Block placement matrix
pub mod grid;
/// Selection rectangle and drag tracking
pub mod selection;

pub use grid::BlockGrid;
pub use selection::{SelectionArea, SelectionTracker};
