/// Flood fill over 4-connected equal cells
pub mod flood;
/// Undo/redo snapshot history
pub mod history;
/// Rectangular selection fill
pub mod region;
