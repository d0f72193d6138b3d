//! Board coordinates.
//!
//! Every exercise in this crate works on a small rectangular grid, so they
//! share one coordinate type. A `Cell` is a (row, column) pair compared by
//! value; it carries no knowledge of grid bounds (see `GridSize` for that).
//!
//! ## Usage
//!
//! ```
//! use puzzle_agents::core::Cell;
//!
//! let cell = Cell::new(2, 3);
//! assert_eq!(cell.row, 2);
//! assert_eq!(cell.col, 3);
//! assert_eq!(format!("{}", cell), "(2, 3)");
//! ```

use serde::{Deserialize, Serialize};

/// A (row, column) coordinate on a grid.
///
/// Rows and columns are 0-based. `Ord` sorts row-major, which gives
/// deterministic iteration when cells are collected out of hash sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// 0-based row index.
    pub row: usize,
    /// 0-based column index.
    pub col: usize,
}

impl Cell {
    /// Create a cell at the given row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality() {
        assert_eq!(Cell::new(1, 2), Cell::new(1, 2));
        assert_ne!(Cell::new(1, 2), Cell::new(2, 1));
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 2), Cell::new(0, 1)];
        cells.sort();
        assert_eq!(
            cells,
            vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 0)]
        );
    }

    #[test]
    fn test_from_tuple() {
        let cell: Cell = (3, 4).into();
        assert_eq!(cell, Cell::new(3, 4));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Cell::new(0, 7)), "(0, 7)");
    }

    #[test]
    fn test_serialization() {
        let cell = Cell::new(5, 6);
        let json = serde_json::to_string(&cell).unwrap();
        let deserialized: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, deserialized);
    }
}
