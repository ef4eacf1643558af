//! Block catalog and palette bookkeeping

/// Static block definitions and lookup helpers
pub mod blocks;
/// Recently used block tracking
pub mod recent;

pub use blocks::{BlockCategory, BlockDefinition, ERASER_ID};
pub use recent::RecentBlocks;
