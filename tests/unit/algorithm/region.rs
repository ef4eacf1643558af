//! Tests for rectangular selection fill

#[cfg(test)]
mod tests {
    use blueprint_planner::algorithm::region::fill_region;
    use blueprint_planner::spatial::{BlockGrid, SelectionArea};

    // Tests every cell in the inclusive rectangle is overwritten
    // Verified by using exclusive end bounds
    #[test]
    fn test_fills_inclusive_rectangle() {
        let grid = BlockGrid::new(5, 5).set_cell(2, 2, Some("dirt")).unwrap();
        let area = SelectionArea::spanning((1, 1), (3, 2));

        let (filled, covered) = fill_region(&grid, &area, "stone");

        assert_eq!(covered, 6);
        assert_eq!(filled.filled_count(), 6);
        for row in 1..=3 {
            for col in 1..=2 {
                assert_eq!(filled.get(row, col), Some("stone"));
            }
        }
        assert_eq!(filled.get(0, 0), None);
        assert_eq!(grid.get(2, 2), Some("dirt"), "Input grid must not change");
    }

    // Tests inverted rectangles are normalized first
    // Verified by removing the normalization call
    #[test]
    fn test_inverted_rectangle() {
        let grid = BlockGrid::new(3, 3);
        let area = SelectionArea {
            start_row: 2,
            start_col: 2,
            end_row: 0,
            end_col: 1,
        };

        let (filled, covered) = fill_region(&grid, &area, "glass");

        assert_eq!(covered, 6);
        assert_eq!(filled.get(0, 1), Some("glass"));
        assert_eq!(filled.get(2, 2), Some("glass"));
        assert_eq!(filled.get(0, 0), None);
    }

    // Tests rectangles reaching past the grid are clipped
    // Verified by dropping the min against grid extents
    #[test]
    fn test_clips_to_grid() {
        let grid = BlockGrid::new(3, 4);
        let area = SelectionArea::spanning((1, 2), (10, 10));

        let (filled, covered) = fill_region(&grid, &area, "sand");

        assert_eq!(covered, 4);
        assert_eq!(filled.filled_count(), 4);
        assert_eq!(filled.dimensions(), (3, 4));
    }

    // Tests a rectangle wholly outside the grid changes nothing
    // Verified by removing the empty-range guard
    #[test]
    fn test_outside_grid() {
        let grid = BlockGrid::new(2, 2);
        let area = SelectionArea::spanning((5, 5), (6, 6));

        let (filled, covered) = fill_region(&grid, &area, "sand");

        assert_eq!(covered, 0);
        assert_eq!(filled, grid);
    }

    // Tests a single cell at the far corner is reached
    // Verified by stopping the cell walk one short of the last index
    #[test]
    fn test_fills_last_cell() {
        let grid = BlockGrid::new(4, 6);
        let area = SelectionArea::spanning((3, 5), (3, 5));

        let (filled, covered) = fill_region(&grid, &area, "torch");

        assert_eq!(covered, 1);
        assert_eq!(filled.get(3, 5), Some("torch"));
        assert_eq!(filled.filled_count(), 1);
    }

    // Tests filling a grid without cells covers nothing
    // Verified by subtracting one from zero extents
    #[test]
    fn test_empty_grid() {
        let grid = BlockGrid::new(0, 0);
        let area = SelectionArea::spanning((0, 0), (0, 0));

        let (filled, covered) = fill_region(&grid, &area, "sand");

        assert_eq!(covered, 0);
        assert_eq!(filled, grid);
    }
}
