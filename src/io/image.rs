//! PNG rasterization of block grids

use image::{ImageBuffer, Rgba, RgbaImage};
use std::collections::BTreeSet;
use std::path::Path;

use crate::catalog::blocks::find_block;
use crate::io::configuration::{BACKGROUND_COLOR, GRID_LINE_COLOR, MAX_CELL_SIZE};
use crate::io::error::{PlannerError, Result, file_system, invalid_parameter};
use crate::spatial::BlockGrid;

/// Smallest cell that still leaves room for a colored interior
const MIN_CELL_SIZE: u32 = 2;

fn check_cell_size(cell_size: u32) -> Result<()> {
    if (MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&cell_size) {
        Ok(())
    } else {
        Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &format!("must be between {MIN_CELL_SIZE} and {MAX_CELL_SIZE}"),
        ))
    }
}

/// Draw the grid as an image, one `cell_size` square per cell
///
/// Cells are separated by one-pixel grid lines; air shows the background
/// color. Block ids missing from the catalog render as air and are logged.
/// `on_row` is called after each grid row is drawn.
///
/// # Errors
///
/// Returns an error if `cell_size` is outside the supported range
pub fn render_grid(
    grid: &BlockGrid,
    cell_size: u32,
    mut on_row: impl FnMut(usize),
) -> Result<RgbaImage> {
    check_cell_size(cell_size)?;

    let width = grid.cols() as u32 * cell_size + 1;
    let height = grid.rows() as u32 * cell_size + 1;
    let mut img: RgbaImage = ImageBuffer::from_pixel(width, height, Rgba(GRID_LINE_COLOR));
    let mut unknown = BTreeSet::new();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let color = match grid.get(row, col) {
                Some(id) => find_block(id).map_or_else(
                    || {
                        unknown.insert(id.to_string());
                        BACKGROUND_COLOR
                    },
                    |block| block.color,
                ),
                None => BACKGROUND_COLOR,
            };

            let left = col as u32 * cell_size + 1;
            let top = row as u32 * cell_size + 1;
            for y in top..top + cell_size - 1 {
                for x in left..left + cell_size - 1 {
                    img.put_pixel(x, y, Rgba(color));
                }
            }
        }
        on_row(row);
    }

    if !unknown.is_empty() {
        log::warn!(
            "Rendered unknown blocks as air: {}",
            unknown.into_iter().collect::<Vec<_>>().join(", ")
        );
    }

    Ok(img)
}

/// Write a rendered image as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn save_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(file_system(parent, "create directory"))?;
    }

    img.save(output_path)
        .map_err(|e| PlannerError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Render the grid and save it as a PNG image
///
/// # Errors
///
/// Returns an error if the cell size is invalid or the file cannot be written
pub fn export_grid_as_png(grid: &BlockGrid, cell_size: u32, output_path: &Path) -> Result<()> {
    let img = render_grid(grid, cell_size, |_| {})?;
    save_png(&img, output_path)?;
    log::debug!(
        "Exported {}x{} grid to {}",
        grid.rows(),
        grid.cols(),
        output_path.display()
    );
    Ok(())
}
