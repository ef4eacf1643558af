//! Editing tools selectable from the palette

use std::fmt;
use std::str::FromStr;

use crate::io::error::{PlannerError, invalid_parameter};

/// Active pointer tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    /// Place the selected block on the activated cell
    #[default]
    Draw,
    /// Flood fill the region under the activated cell
    Fill,
    /// Clear the activated cell
    Erase,
    /// Drag out a rectangular selection
    SelectArea,
}

impl Tool {
    /// Every tool, in toolbar order
    pub const ALL: [Self; 4] = [Self::Draw, Self::Fill, Self::Erase, Self::SelectArea];

    /// Stable name used in scripts and logs
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draw => "draw",
            Self::Fill => "fill",
            Self::Erase => "erase",
            Self::SelectArea => "select_area",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('-', "_");
        if name == "select" {
            return Ok(Self::SelectArea);
        }
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == name)
            .ok_or_else(|| {
                invalid_parameter("tool", &name, &"expected draw, fill, erase or select")
            })
    }
}
