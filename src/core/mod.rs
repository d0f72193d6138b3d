//! Shared building blocks: cells, grid bounds, deterministic RNG.
//!
//! Everything here is exercise-agnostic. The tic-tac-toe board, the
//! minesweeper board, and the inference agent all address squares through
//! `Cell`/`GridSize` so there is exactly one definition of "in bounds" and
//! "neighboring".

pub mod cell;
pub mod grid;
pub mod rng;

pub use cell::Cell;
pub use grid::GridSize;
pub use rng::AgentRng;
