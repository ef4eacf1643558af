//! Most-recently-used block list shown at the top of the palette

use crate::catalog::blocks::ERASER_ID;
use crate::io::configuration::MAX_RECENT_BLOCKS;
use serde::{Deserialize, Serialize};

/// Ordered block ids, most recent first, without duplicates
///
/// The eraser is never remembered. The list is persisted alongside the
/// saved projects so it survives between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentBlocks {
    ids: Vec<String>,
}

impl RecentBlocks {
    /// Create an empty list
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Rebuild a list from persisted ids, dropping duplicates and overflow
    pub fn from_ids(ids: impl IntoIterator<Item = String>) -> Self {
        let mut recent = Self::new();
        for id in ids {
            if id == ERASER_ID || recent.ids.contains(&id) {
                continue;
            }
            if recent.ids.len() == MAX_RECENT_BLOCKS {
                break;
            }
            recent.ids.push(id);
        }
        recent
    }

    /// Move `id` to the front, evicting the oldest entry when full
    pub fn touch(&mut self, id: &str) {
        if id == ERASER_ID {
            return;
        }
        self.ids.retain(|existing| existing != id);
        self.ids.insert(0, id.to_string());
        self.ids.truncate(MAX_RECENT_BLOCKS);
    }

    /// Remembered ids, most recent first
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of remembered blocks
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no block has been used yet
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
