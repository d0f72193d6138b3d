//! Sentence-based minesweeper inference agent.
//!
//! The agent keeps a knowledge base of [`Sentence`]s and two derived sets:
//! cells proven to be mines and cells proven safe. Whenever the board
//! reveals a new neighbor count, the agent folds it in and then runs its
//! inference passes to a fixed point:
//!
//! - **Saturation**: any sentence whose cell count equals its mine count is
//!   all mines; any sentence with a zero count is all safe. Marking a cell
//!   updates every sentence, which can fully determine further sentences.
//! - **Subset inference**: if sentence A's cells are a subset of B's, then
//!   `B.cells - A.cells` contains exactly `B.count - A.count` mines.
//!
//! The passes feed each other (a new mine can create a subset pair, a
//! derived sentence can saturate), so they are interleaved until neither
//! changes anything.

use rustc_hash::FxHashSet;

use crate::core::{AgentRng, Cell, GridSize};
use crate::error::{Error, Result};
use crate::minesweeper::Sentence;

/// A minesweeper player that deduces mine locations from neighbor counts.
///
/// ```
/// use puzzle_agents::core::{Cell, GridSize};
/// use puzzle_agents::minesweeper::MinesweeperAgent;
///
/// let mut agent = MinesweeperAgent::new(GridSize::new(8, 8), 42);
///
/// // Probing (1, 1) revealed zero neighboring mines: all 8 neighbors are
/// // provably safe.
/// agent.add_knowledge(Cell::new(1, 1), 0).unwrap();
/// assert_eq!(agent.known_safes().len(), 9);
/// ```
#[derive(Clone, Debug)]
pub struct MinesweeperAgent {
    size: GridSize,
    /// Cells already probed.
    moves_made: FxHashSet<Cell>,
    /// Cells proven to be mines. Always disjoint from `safes`.
    mines: FxHashSet<Cell>,
    /// Cells proven safe.
    safes: FxHashSet<Cell>,
    /// Sentences over cells of still-unknown status.
    knowledge: Vec<Sentence>,
    rng: AgentRng,
}

impl MinesweeperAgent {
    /// Create an agent for a board of the given size.
    ///
    /// The seed only affects which of several equally good moves the
    /// suggestion methods pick.
    #[must_use]
    pub fn new(size: GridSize, seed: u64) -> Self {
        Self {
            size,
            moves_made: FxHashSet::default(),
            mines: FxHashSet::default(),
            safes: FxHashSet::default(),
            knowledge: Vec::new(),
            rng: AgentRng::new(seed),
        }
    }

    /// Grid dimensions this agent reasons over.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Cells proven to be mines so far.
    #[must_use]
    pub fn known_mines(&self) -> &FxHashSet<Cell> {
        &self.mines
    }

    /// Cells proven safe so far.
    #[must_use]
    pub fn known_safes(&self) -> &FxHashSet<Cell> {
        &self.safes
    }

    /// Cells already probed.
    #[must_use]
    pub fn moves_made(&self) -> &FxHashSet<Cell> {
        &self.moves_made
    }

    /// The current sentence knowledge base.
    #[must_use]
    pub fn knowledge(&self) -> &[Sentence] {
        &self.knowledge
    }

    /// Record that `cell` is a mine and propagate through every sentence.
    ///
    /// Idempotent: re-marking a known mine changes nothing.
    pub fn mark_mine(&mut self, cell: Cell) {
        if !self.mines.insert(cell) {
            return;
        }
        assert!(
            !self.safes.contains(&cell),
            "Cell {cell} proven both mine and safe"
        );
        for sentence in &mut self.knowledge {
            sentence.mark_mine(cell);
        }
        self.knowledge.retain(|s| !s.is_empty());
    }

    /// Record that `cell` is safe and propagate through every sentence.
    ///
    /// Idempotent.
    pub fn mark_safe(&mut self, cell: Cell) {
        if !self.safes.insert(cell) {
            return;
        }
        assert!(
            !self.mines.contains(&cell),
            "Cell {cell} proven both mine and safe"
        );
        for sentence in &mut self.knowledge {
            sentence.mark_safe(cell);
        }
        self.knowledge.retain(|s| !s.is_empty());
    }

    /// Fold in the board's answer for a probed cell: `count` mines among
    /// its neighbors.
    ///
    /// Fails fast on out-of-bounds cells, cells probed before, and counts
    /// no neighborhood could produce. On success the cell is recorded as
    /// probed and safe, a sentence over its unknown neighbors is added, and
    /// inference runs to a fixed point.
    pub fn add_knowledge(&mut self, cell: Cell, count: usize) -> Result<()> {
        if !self.size.contains(cell) {
            return Err(Error::OutOfBounds {
                cell,
                grid: self.size,
            });
        }
        if self.moves_made.contains(&cell) {
            return Err(Error::AlreadyProbed { cell });
        }
        let neighbor_total = self.size.neighbors(cell).count();
        if count > neighbor_total {
            return Err(Error::ImpossibleMineCount {
                cell,
                count,
                neighbors: neighbor_total,
            });
        }

        self.moves_made.insert(cell);
        self.mark_safe(cell);

        // Neighbors of known status are folded into the count instead of
        // the sentence, so sentences only ever name unknown cells.
        let mut effective_count = count;
        let mut unknown = Vec::new();
        for neighbor in self.size.neighbors(cell) {
            if self.mines.contains(&neighbor) {
                assert!(
                    effective_count > 0,
                    "Count at {cell} is below its known neighboring mines"
                );
                effective_count -= 1;
            } else if !self.safes.contains(&neighbor) {
                unknown.push(neighbor);
            }
        }

        if !unknown.is_empty() {
            self.knowledge.push(Sentence::new(unknown, effective_count));
        }

        self.run_inference();
        Ok(())
    }

    /// A cell known to be safe that has not been probed yet.
    ///
    /// Does not change what the agent knows; only the RNG advances.
    pub fn safe_move_suggestion(&mut self) -> Option<Cell> {
        let mut candidates: Vec<Cell> = self
            .safes
            .difference(&self.moves_made)
            .copied()
            .collect();
        candidates.sort();
        self.rng.choose(&candidates).copied()
    }

    /// An arbitrary unprobed cell not known to be a mine.
    ///
    /// Returns `None` once every cell is either probed or a known mine.
    pub fn random_move_suggestion(&mut self) -> Option<Cell> {
        if self.mines.len() + self.moves_made.len() == self.size.cell_count() {
            return None;
        }
        let mut candidates: Vec<Cell> = self
            .size
            .cells()
            .filter(|c| !self.moves_made.contains(c) && !self.mines.contains(c))
            .collect();
        candidates.sort();
        self.rng.choose(&candidates).copied()
    }

    /// Interleave the saturation and subset passes until neither produces
    /// a change. One pass of each is not enough: a newly proven mine can
    /// expose a subset pair and a derived sentence can saturate.
    fn run_inference(&mut self) {
        loop {
            let mut changed = self.saturate();
            changed |= self.infer_subsets();
            if !changed {
                break;
            }
        }
    }

    /// Mark every cell some sentence fully determines, repeating until a
    /// scan proves nothing new.
    fn saturate(&mut self) -> bool {
        let mut changed = false;
        loop {
            let mut mines: Vec<Cell> = Vec::new();
            let mut safes: Vec<Cell> = Vec::new();
            for sentence in &self.knowledge {
                mines.extend(sentence.known_mines());
                safes.extend(sentence.known_safes());
            }
            mines.retain(|c| !self.mines.contains(c));
            safes.retain(|c| !self.safes.contains(c));

            if mines.is_empty() && safes.is_empty() {
                return changed;
            }
            changed = true;

            for cell in mines {
                self.mark_mine(cell);
            }
            for cell in safes {
                self.mark_safe(cell);
            }
        }
    }

    /// Collapse duplicate sentences and derive `B - A` sentences for every
    /// subset pair not already known.
    fn infer_subsets(&mut self) -> bool {
        let mut changed = false;

        let mut deduped: Vec<Sentence> = Vec::with_capacity(self.knowledge.len());
        for sentence in self.knowledge.drain(..) {
            if deduped.contains(&sentence) {
                changed = true;
            } else {
                deduped.push(sentence);
            }
        }
        self.knowledge = deduped;

        let mut derived: Vec<Sentence> = Vec::new();
        for (i, a) in self.knowledge.iter().enumerate() {
            for (j, b) in self.knowledge.iter().enumerate() {
                if i == j || !a.is_subset_of(b) {
                    continue;
                }
                let inferred = a.infer_difference(b);
                if !inferred.is_empty()
                    && !self.knowledge.contains(&inferred)
                    && !derived.contains(&inferred)
                {
                    derived.push(inferred);
                }
            }
        }

        if !derived.is_empty() {
            changed = true;
            self.knowledge.extend(derived);
        }
        changed
    }
}
