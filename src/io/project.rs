//! Persisted project records and JSON import validation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::io::configuration::{DEFAULT_EXPORT_STEM, DEFAULT_IMAGE_STEM};
use crate::io::error::{PlannerError, Result, invalid_project};
use crate::spatial::BlockGrid;

const INVALID_FORMAT: &str = "Invalid project file format.";
const INVALID_GRID_DATA: &str = "Invalid grid data in project file.";
const DIMENSION_MISMATCH: &str = "Grid dimensions do not match rows/cols.";

/// A saved blueprint as stored and exchanged in JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Store identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Row-major cells, `null` for air
    pub grid: Vec<Vec<Option<String>>>,
    /// Row count
    pub rows: usize,
    /// Column count
    pub cols: usize,
    /// First save time
    pub created_at: DateTime<Utc>,
    /// Last save time
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Generate a fresh store identifier of the form `proj_<millis>_<hex>`
    pub fn generate_id(now: DateTime<Utc>) -> String {
        format!(
            "proj_{}_{:x}",
            now.timestamp_millis(),
            rand::random::<u32>()
        )
    }

    /// Decode the stored cells into a grid, checking them against rows/cols
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are ragged or their shape disagrees with
    /// the recorded dimensions
    pub fn block_grid(&self) -> Result<BlockGrid> {
        let grid = BlockGrid::from_rows(self.grid.clone())?;
        check_dimensions(&grid, self.rows, self.cols)?;
        Ok(grid)
    }

    /// Parse a project record from JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid project document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed JSON document
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn check_dimensions(grid: &BlockGrid, rows: usize, cols: usize) -> Result<()> {
    if grid.dimensions() == (rows, cols) {
        Ok(())
    } else {
        Err(PlannerError::InvalidGrid {
            reason: DIMENSION_MISMATCH.to_string(),
        })
    }
}

/// Validated content of an imported project file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedProject {
    /// Project name from the file
    pub name: String,
    /// Decoded grid
    pub grid: BlockGrid,
}

/// Validate and decode an imported project document
///
/// The document must carry a non-empty `name`, a `grid`, and numeric `rows`
/// and `cols`. Every grid row must be an array of strings or nulls, and the
/// grid shape must match the declared dimensions. Fields such as `id` and
/// timestamps are ignored.
///
/// # Errors
///
/// Returns an error naming the first problem found
pub fn parse_import(json: &str) -> Result<ImportedProject> {
    let document: Value = serde_json::from_str(json)?;
    let object = document
        .as_object()
        .ok_or_else(|| invalid_project(&INVALID_FORMAT))?;

    let name = object
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty());
    let cells = object.get("grid").filter(|cells| !cells.is_null());
    let rows = object.get("rows").and_then(Value::as_f64);
    let cols = object.get("cols").and_then(Value::as_f64);

    let (Some(name), Some(cells), Some(rows), Some(cols)) = (name, cells, rows, cols) else {
        return Err(invalid_project(&INVALID_FORMAT));
    };

    let decoded = decode_cells(cells).ok_or_else(|| invalid_project(&INVALID_GRID_DATA))?;
    let grid = BlockGrid::from_rows(decoded)?;
    let (Some(rows), Some(cols)) = (as_dimension(rows), as_dimension(cols)) else {
        return Err(PlannerError::InvalidGrid {
            reason: DIMENSION_MISMATCH.to_string(),
        });
    };
    check_dimensions(&grid, rows, cols)?;

    Ok(ImportedProject {
        name: name.to_string(),
        grid,
    })
}

/// Dimension written as any JSON number; `1` and `1.0` are the same size
fn as_dimension(value: f64) -> Option<usize> {
    (value >= 0.0 && value.fract() < f64::EPSILON).then_some(value as usize)
}

fn decode_cells(grid: &Value) -> Option<Vec<Vec<Option<String>>>> {
    grid.as_array()?.iter().map(decode_row).collect()
}

fn decode_row(row: &Value) -> Option<Vec<Option<String>>> {
    row.as_array()?
        .iter()
        .map(|cell| match cell {
            Value::String(id) => Some(Some(id.clone())),
            Value::Null => Some(None),
            _ => None,
        })
        .collect()
}

fn file_stem(name: &str, fallback: &str) -> String {
    let stem = name.split_whitespace().collect::<Vec<_>>().join("_");
    if stem.is_empty() {
        fallback.to_string()
    } else {
        stem
    }
}

/// File name for a JSON export: whitespace runs become `_`
pub fn export_file_name(project_name: &str) -> String {
    format!("{}.json", file_stem(project_name, DEFAULT_EXPORT_STEM))
}

/// File name for a PNG export of the named project
pub fn image_file_name(project_name: &str) -> String {
    let stem = project_name.trim();
    if stem.is_empty() {
        format!("{DEFAULT_IMAGE_STEM}.png")
    } else {
        format!("{stem}.png")
    }
}
