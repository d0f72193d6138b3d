//! Minesweeper board simulator.
//!
//! This is the agent's environment: it knows where the mines are, answers
//! probes with neighbor-mine counts, and tracks flags. The agent never
//! reads the mine set directly; tests do, to check the agent's conclusions
//! against ground truth.

use rustc_hash::FxHashSet;

use crate::core::{AgentRng, Cell, GridSize};
use crate::error::{Error, Result};

/// A minesweeper board with hidden mines.
#[derive(Clone, Debug)]
pub struct Minesweeper {
    size: GridSize,
    mines: FxHashSet<Cell>,
    flagged: FxHashSet<Cell>,
}

/// Builder for creating a board.
///
/// ```
/// use puzzle_agents::minesweeper::MinesweeperBuilder;
///
/// let board = MinesweeperBuilder::new()
///     .height(8)
///     .width(8)
///     .mine_count(8)
///     .build(42);
///
/// assert_eq!(board.mine_count(), 8);
/// ```
pub struct MinesweeperBuilder {
    height: usize,
    width: usize,
    mine_count: usize,
}

impl Default for MinesweeperBuilder {
    fn default() -> Self {
        Self {
            height: 8,
            width: 8,
            mine_count: 8,
        }
    }
}

impl MinesweeperBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(mut self, height: usize) -> Self {
        assert!(height > 0, "Board height must be non-zero");
        self.height = height;
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        assert!(width > 0, "Board width must be non-zero");
        self.width = width;
        self
    }

    pub fn mine_count(mut self, count: usize) -> Self {
        self.mine_count = count;
        self
    }

    /// Build the board, placing mines deterministically from `seed`.
    ///
    /// Panics if more mines were requested than the grid has cells.
    pub fn build(self, seed: u64) -> Minesweeper {
        let size = GridSize::new(self.height, self.width);
        assert!(
            self.mine_count <= size.cell_count(),
            "More mines than cells"
        );

        // Rejection sampling: the mine density here is low enough that
        // retries are rare.
        let mut rng = AgentRng::new(seed);
        let mut mines = FxHashSet::default();
        while mines.len() != self.mine_count {
            let row = rng.gen_range_usize(0..self.height);
            let col = rng.gen_range_usize(0..self.width);
            mines.insert(Cell::new(row, col));
        }

        Minesweeper {
            size,
            mines,
            flagged: FxHashSet::default(),
        }
    }
}

impl Minesweeper {
    /// Build a board from an explicit mine layout.
    ///
    /// Used by tests that need a known board. Panics if a mine is out of
    /// bounds.
    #[must_use]
    pub fn with_mines(size: GridSize, mines: impl IntoIterator<Item = Cell>) -> Self {
        let mines: FxHashSet<Cell> = mines.into_iter().collect();
        for &mine in &mines {
            assert!(size.contains(mine), "Mine {mine} outside the {size} grid");
        }
        Self {
            size,
            mines,
            flagged: FxHashSet::default(),
        }
    }

    /// Grid dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Number of mines on the board.
    #[must_use]
    pub fn mine_count(&self) -> usize {
        self.mines.len()
    }

    /// Whether a cell holds a mine.
    ///
    /// Errors on out-of-bounds cells.
    pub fn is_mine(&self, cell: Cell) -> Result<bool> {
        if !self.size.contains(cell) {
            return Err(Error::OutOfBounds {
                cell,
                grid: self.size,
            });
        }
        Ok(self.mines.contains(&cell))
    }

    /// Number of mines within one row and column of `cell`, not counting
    /// the cell itself.
    pub fn nearby_mines(&self, cell: Cell) -> Result<usize> {
        if !self.size.contains(cell) {
            return Err(Error::OutOfBounds {
                cell,
                grid: self.size,
            });
        }
        Ok(self
            .size
            .neighbors(cell)
            .filter(|n| self.mines.contains(n))
            .count())
    }

    /// Flag a cell as a suspected mine.
    pub fn flag(&mut self, cell: Cell) -> Result<()> {
        if !self.size.contains(cell) {
            return Err(Error::OutOfBounds {
                cell,
                grid: self.size,
            });
        }
        self.flagged.insert(cell);
        Ok(())
    }

    /// Whether every mine (and nothing else) has been flagged.
    #[must_use]
    pub fn won(&self) -> bool {
        self.flagged == self.mines
    }

    /// The mine layout. Ground truth for tests; the agent must not use it.
    #[must_use]
    pub fn mines(&self) -> &FxHashSet<Cell> {
        &self.mines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_places_requested_mines() {
        let board = MinesweeperBuilder::new()
            .height(8)
            .width(8)
            .mine_count(10)
            .build(42);

        assert_eq!(board.mine_count(), 10);
        for &mine in board.mines() {
            assert!(board.size().contains(mine));
        }
    }

    #[test]
    fn test_builder_is_deterministic() {
        let board1 = MinesweeperBuilder::new().mine_count(8).build(7);
        let board2 = MinesweeperBuilder::new().mine_count(8).build(7);
        assert_eq!(board1.mines(), board2.mines());
    }

    #[test]
    fn test_different_seeds_differ() {
        let board1 = MinesweeperBuilder::new().mine_count(8).build(1);
        let board2 = MinesweeperBuilder::new().mine_count(8).build(2);
        assert_ne!(board1.mines(), board2.mines());
    }

    #[test]
    fn test_nearby_mines() {
        let size = GridSize::new(3, 3);
        let board = Minesweeper::with_mines(size, [Cell::new(0, 0), Cell::new(2, 2)]);

        assert_eq!(board.nearby_mines(Cell::new(1, 1)).unwrap(), 2);
        assert_eq!(board.nearby_mines(Cell::new(0, 1)).unwrap(), 1);
        assert_eq!(board.nearby_mines(Cell::new(2, 0)).unwrap(), 0);
        // The cell itself never counts.
        assert_eq!(board.nearby_mines(Cell::new(0, 0)).unwrap(), 0);
    }

    #[test]
    fn test_is_mine() {
        let board = Minesweeper::with_mines(GridSize::new(2, 2), [Cell::new(0, 1)]);
        assert!(board.is_mine(Cell::new(0, 1)).unwrap());
        assert!(!board.is_mine(Cell::new(1, 1)).unwrap());
    }

    #[test]
    fn test_out_of_bounds_probe() {
        let board = Minesweeper::with_mines(GridSize::new(2, 2), []);
        assert!(matches!(
            board.nearby_mines(Cell::new(5, 0)),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_won_requires_exact_flags() {
        let mut board = Minesweeper::with_mines(GridSize::new(2, 2), [Cell::new(0, 0)]);
        assert!(!board.won());

        board.flag(Cell::new(0, 0)).unwrap();
        assert!(board.won());

        board.flag(Cell::new(1, 1)).unwrap();
        assert!(!board.won());
    }

    #[test]
    fn test_full_mine_board() {
        let board = MinesweeperBuilder::new()
            .height(2)
            .width(2)
            .mine_count(4)
            .build(42);
        assert_eq!(board.mine_count(), 4);
    }
}
