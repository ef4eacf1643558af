//! Input/output: persistence, import/export, rendering and the command line

/// Command-line interface and batch rendering
pub mod cli;
/// Editor constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG rendering of grids
pub mod image;
/// Logger initialization
pub mod logging;
/// Progress bars for batch rendering
pub mod progress;
/// Project records and document import
pub mod project;
/// Edit scripts replayed against a session
pub mod script;
/// Directory-backed project store
pub mod store;
