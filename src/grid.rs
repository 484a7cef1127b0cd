//! In-memory cell grid: sheet → row → column strings.
//!
//! The grid is fully materialized before extraction starts. Merged cells have
//! already been "unmerged" by the reader, so every covered cell carries the
//! merge's value. All whitespace trimming happens here, keeping layout noise
//! out of the extraction logic.

use crate::layout::Coordinate;

#[derive(Debug, Clone, Default)]
pub struct Grid {
    sheets: Vec<Vec<Vec<String>>>,
}

impl Grid {
    pub fn new(sheets: Vec<Vec<Vec<String>>>) -> Self {
        Self { sheets }
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Number of rows on a sheet. Drives the row-scan termination; there is
    /// no end-of-data sentinel in the statement itself.
    pub fn row_count(&self, sheet: usize) -> usize {
        self.sheets.get(sheet).map(Vec::len).unwrap_or(0)
    }

    /// Trimmed cell value, or `None` when the coordinate is outside the grid.
    pub fn try_value(&self, coord: Coordinate) -> Option<&str> {
        self.sheets
            .get(coord.sheet)?
            .get(coord.row)?
            .get(coord.col)
            .map(|cell| cell.trim())
    }

    /// Trimmed cell value. The caller must guarantee the coordinate is in
    /// bounds; a well-formed fixed layout is a precondition of the whole run.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn value(&self, coord: Coordinate) -> &str {
        self.try_value(coord).unwrap_or_else(|| {
            panic!(
                "cell ({}, {}, {}) outside statement grid",
                coord.sheet, coord.row, coord.col
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_row_grid() -> Grid {
        Grid::new(vec![vec![
            vec!["  a  ".to_string(), "b".to_string()],
            vec!["".to_string(), " c\t".to_string()],
        ]])
    }

    #[test]
    fn test_value_is_trimmed() {
        let grid = two_row_grid();
        assert_eq!(grid.value(Coordinate::new(0, 0, 0)), "a");
        assert_eq!(grid.value(Coordinate::new(0, 1, 1)), "c");
        assert_eq!(grid.value(Coordinate::new(0, 1, 0)), "");
    }

    #[test]
    fn test_row_count() {
        let grid = two_row_grid();
        assert_eq!(grid.row_count(0), 2);
        assert_eq!(grid.row_count(1), 0);
    }

    #[test]
    fn test_try_value_out_of_bounds() {
        let grid = two_row_grid();
        assert_eq!(grid.try_value(Coordinate::new(0, 0, 5)), None);
        assert_eq!(grid.try_value(Coordinate::new(0, 9, 0)), None);
        assert_eq!(grid.try_value(Coordinate::new(3, 0, 0)), None);
    }

    #[test]
    #[should_panic(expected = "outside statement grid")]
    fn test_value_out_of_bounds_panics() {
        two_row_grid().value(Coordinate::new(0, 9, 9));
    }
}
