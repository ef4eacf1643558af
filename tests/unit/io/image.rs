//! Tests for PNG rendering of block grids

#[cfg(test)]
mod tests {
    use blueprint_planner::PlannerError;
    use blueprint_planner::catalog::blocks::find_block;
    use blueprint_planner::io::configuration::{BACKGROUND_COLOR, GRID_LINE_COLOR};
    use blueprint_planner::io::image::{export_grid_as_png, render_grid, save_png};
    use blueprint_planner::spatial::BlockGrid;
    use image::Rgba;

    // Tests image size accounts for cells and grid lines
    // Verified by dropping the trailing grid line
    #[test]
    fn test_image_dimensions() {
        let grid = BlockGrid::new(3, 5);
        let img = render_grid(&grid, 10, |_| {}).unwrap();

        assert_eq!(img.width(), 5 * 10 + 1);
        assert_eq!(img.height(), 3 * 10 + 1);
    }

    // Tests cells take their block color and air the background
    // Verified by swapping row and column when positioning cells
    #[test]
    fn test_cell_colors() {
        let grid = BlockGrid::new(2, 3).set_cell(0, 2, Some("stone")).unwrap();
        let img = render_grid(&grid, 4, |_| {}).unwrap();
        let stone = find_block("stone").unwrap().color;

        assert_eq!(img.get_pixel(0, 0), &Rgba(GRID_LINE_COLOR));
        assert_eq!(img.get_pixel(2 * 4 + 1, 1), &Rgba(stone));
        assert_eq!(img.get_pixel(1, 1), &Rgba(BACKGROUND_COLOR));
        assert_eq!(img.get_pixel(1, 4 + 1), &Rgba(BACKGROUND_COLOR));
    }

    // Tests unknown block ids render as air
    // Verified by skipping cells with unknown ids entirely
    #[test]
    fn test_unknown_block_renders_as_air() {
        let grid = BlockGrid::new(1, 1).set_cell(0, 0, Some("mystery")).unwrap();
        let img = render_grid(&grid, 3, |_| {}).unwrap();
        assert_eq!(img.get_pixel(1, 1), &Rgba(BACKGROUND_COLOR));
    }

    // Tests the row callback fires once per grid row
    // Verified by calling the callback per cell
    #[test]
    fn test_row_callback() {
        let grid = BlockGrid::new(4, 2);
        let mut rows_seen = Vec::new();
        render_grid(&grid, 2, |row| rows_seen.push(row)).unwrap();
        assert_eq!(rows_seen, vec![0, 1, 2, 3]);
    }

    // Tests cell sizes outside the supported range are rejected
    // Verified by removing check_cell_size
    #[test]
    fn test_invalid_cell_size() {
        let grid = BlockGrid::new(1, 1);
        for cell_size in [0, 1, 129] {
            assert!(matches!(
                render_grid(&grid, cell_size, |_| {}),
                Err(PlannerError::InvalidParameter {
                    parameter: "cell_size",
                    ..
                })
            ));
        }
    }

    // Tests exporting writes a decodable PNG, creating parent directories
    // Verified by removing create_dir_all from save_png
    #[test]
    fn test_export_creates_png() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("plan.png");
        let grid = BlockGrid::new(2, 2).set_cell(1, 1, Some("gold_block")).unwrap();

        export_grid_as_png(&grid, 6, &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.width(), 13);
        assert_eq!(decoded.height(), 13);
    }

    // Tests saving to an unwritable location reports an error
    // Verified by ignoring save failures
    #[test]
    fn test_save_png_failure() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();

        let img = render_grid(&BlockGrid::new(1, 1), 2, |_| {}).unwrap();
        assert!(save_png(&img, &blocker.join("out.png")).is_err());
    }
}
