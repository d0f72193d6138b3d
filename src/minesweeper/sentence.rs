//! Logical sentences about mine locations.
//!
//! A sentence asserts "exactly `count` of these cells are mines". Sentences
//! only ever reference cells of unknown status: as soon as a cell is proven
//! safe or a mine, the agent removes it from every sentence.
//!
//! Cell sets are `im::HashSet`, so cloning a sentence during subset
//! inference is O(1) and the set subtraction is structural sharing rather
//! than a copy.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};

use crate::core::Cell;

/// "Exactly `count` of `cells` are mines."
///
/// Invariant: `count <= cells.len()` at all times. A sentence breaking that
/// would encode contradictory knowledge and is a construction-time panic.
///
/// ```
/// use puzzle_agents::core::Cell;
/// use puzzle_agents::minesweeper::Sentence;
///
/// let sentence = Sentence::new([Cell::new(0, 0), Cell::new(0, 1)], 2);
/// // Both cells must be mines.
/// assert_eq!(sentence.known_mines().len(), 2);
/// assert!(sentence.known_safes().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    cells: ImHashSet<Cell>,
    count: usize,
}

impl Sentence {
    /// Create a sentence.
    ///
    /// Panics if `count` exceeds the number of cells.
    #[must_use]
    pub fn new(cells: impl IntoIterator<Item = Cell>, count: usize) -> Self {
        let cells: ImHashSet<Cell> = cells.into_iter().collect();
        assert!(
            count <= cells.len(),
            "Sentence count {count} exceeds {} cells",
            cells.len()
        );
        Self { cells, count }
    }

    /// The cells this sentence talks about.
    #[must_use]
    pub fn cells(&self) -> &ImHashSet<Cell> {
        &self.cells
    }

    /// How many of the cells are mines.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the sentence has no cells left (retired).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells this sentence proves to be mines: all of them, iff every cell
    /// must be a mine.
    #[must_use]
    pub fn known_mines(&self) -> ImHashSet<Cell> {
        if self.cells.len() == self.count {
            self.cells.clone()
        } else {
            ImHashSet::new()
        }
    }

    /// Cells this sentence proves to be safe: all of them, iff none can be
    /// a mine.
    #[must_use]
    pub fn known_safes(&self) -> ImHashSet<Cell> {
        if self.count == 0 {
            self.cells.clone()
        } else {
            ImHashSet::new()
        }
    }

    /// Record that `cell` is a mine.
    ///
    /// If the sentence mentions the cell, it is removed and the count drops
    /// by one. Returns whether the sentence changed.
    pub fn mark_mine(&mut self, cell: Cell) -> bool {
        if self.cells.remove(&cell).is_some() {
            assert!(self.count > 0, "Mine marked in a zero-count sentence");
            self.count -= 1;
            true
        } else {
            false
        }
    }

    /// Record that `cell` is safe.
    ///
    /// If the sentence mentions the cell, it is removed; the count is
    /// unchanged. Returns whether the sentence changed.
    pub fn mark_safe(&mut self, cell: Cell) -> bool {
        if self.cells.remove(&cell).is_some() {
            assert!(
                self.count <= self.cells.len(),
                "Safe cell removal left count above cell total"
            );
            true
        } else {
            false
        }
    }

    /// Whether this sentence's cells are a subset of `other`'s.
    #[must_use]
    pub fn is_subset_of(&self, other: &Sentence) -> bool {
        self.cells.is_subset(&other.cells)
    }

    /// Subset inference: given that `self`'s cells are a subset of
    /// `other`'s, the cells only in `other` contain exactly the leftover
    /// mines.
    ///
    /// Panics if called on a non-subset pair.
    #[must_use]
    pub fn infer_difference(&self, other: &Sentence) -> Sentence {
        assert!(self.is_subset_of(other), "Difference requires a subset pair");
        Sentence {
            cells: other.cells.clone().relative_complement(self.cells.clone()),
            count: other.count - self.count,
        }
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cells: Vec<Cell> = self.cells.iter().copied().collect();
        cells.sort();
        write!(f, "{{")?;
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "}} = {}", self.count)
    }
}
