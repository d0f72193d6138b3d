//! Grid bounds and neighbor enumeration.
//!
//! `GridSize` is the one place that knows how big a board is. Bounds checks
//! and the "up to 8 surrounding cells" rule live here so the minesweeper
//! board and the inference agent cannot disagree about them.

use serde::{Deserialize, Serialize};

use super::Cell;

/// Dimensions of a rectangular board.
///
/// ```
/// use puzzle_agents::core::{Cell, GridSize};
///
/// let grid = GridSize::new(8, 8);
/// assert!(grid.contains(Cell::new(7, 7)));
/// assert!(!grid.contains(Cell::new(8, 0)));
/// assert_eq!(grid.neighbors(Cell::new(0, 0)).count(), 3);
/// assert_eq!(grid.neighbors(Cell::new(4, 4)).count(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    height: usize,
    width: usize,
}

impl GridSize {
    /// Create grid dimensions.
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        assert!(height > 0, "Grid height must be non-zero");
        assert!(width > 0, "Grid width must be non-zero");
        Self { height, width }
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(self) -> usize {
        self.height
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(self) -> usize {
        self.width
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.height * self.width
    }

    /// Check whether a cell lies on this grid.
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Cell::new(row, col)))
    }

    /// Iterate over the in-bounds cells within one row and one column of
    /// `cell`, excluding `cell` itself. Yields at most 8 cells.
    pub fn neighbors(self, cell: Cell) -> impl Iterator<Item = Cell> {
        let row_lo = cell.row.saturating_sub(1);
        let col_lo = cell.col.saturating_sub(1);
        let row_hi = (cell.row + 1).min(self.height - 1);
        let col_hi = (cell.col + 1).min(self.width - 1);

        (row_lo..=row_hi)
            .flat_map(move |row| (col_lo..=col_hi).map(move |col| Cell::new(row, col)))
            .filter(move |&c| c != cell)
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}
