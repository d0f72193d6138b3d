//! Error types for caller misuse.
//!
//! Internal invariant violations (a sentence count going negative, a model
//! missing a symbol) are programming errors and panic instead; see the
//! individual modules.

use thiserror::Error;

use crate::core::{Cell, GridSize};

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported for malformed caller input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("cell {cell} is outside the {grid} grid")]
    OutOfBounds { cell: Cell, grid: GridSize },

    #[error("square {cell} is already occupied")]
    SquareOccupied { cell: Cell },

    #[error("game is already over")]
    GameOver,

    #[error("cell {cell} was already probed")]
    AlreadyProbed { cell: Cell },

    #[error("neighbor mine count {count} exceeds the {neighbors} neighbors of {cell}")]
    ImpossibleMineCount {
        cell: Cell,
        count: usize,
        neighbors: usize,
    },
}
