//! # puzzle-agents
//!
//! Three classic AI exercises as one small library:
//!
//! 1. **Tic-tac-toe**: an immutable 3x3 board and an optimal minimax
//!    player.
//! 2. **Knights and Knaves**: truth-teller/liar puzzles encoded in
//!    propositional logic and solved by model checking.
//! 3. **Minesweeper**: a sentence-based knowledge agent that deduces safe
//!    cells and mines from neighbor counts, running saturation and
//!    subset inference to a fixed point.
//!
//! ## Design notes
//!
//! - **Shared grid vocabulary**: both board games address squares through
//!   `core::Cell` and `core::GridSize`, so bounds and neighborhoods are
//!   defined once.
//! - **Deterministic randomness**: mine placement and move suggestions use
//!   seeded `core::AgentRng`; a single seed reproduces a whole game.
//! - **Fail fast on misuse**: illegal moves and malformed probe results
//!   return [`Error`]; broken internal invariants panic.
//!
//! ## Modules
//!
//! - `core`: cells, grid bounds, deterministic RNG
//! - `logic`: propositional formulas, models, entailment
//! - `knights`: the Knights-and-Knaves puzzle family
//! - `tictactoe`: board, rules, minimax search
//! - `minesweeper`: board simulator, sentences, inference agent

pub mod core;
pub mod error;
pub mod knights;
pub mod logic;
pub mod minesweeper;
pub mod tictactoe;

// Re-export commonly used types
pub use crate::core::{AgentRng, Cell, GridSize};

pub use crate::error::{Error, Result};

pub use crate::logic::{entails, satisfiable, Formula, Model, SymbolId, SymbolTable};

pub use crate::knights::{Puzzle, Role};

pub use crate::tictactoe::{best_move, Board, Mark};

pub use crate::minesweeper::{Minesweeper, MinesweeperAgent, MinesweeperBuilder, Sentence};
