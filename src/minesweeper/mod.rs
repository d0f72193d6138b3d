//! Minesweeper: board simulator, sentence knowledge, inference agent.
//!
//! The board knows the ground truth; the agent sees only probe results and
//! deduces the rest. They are wired together by whatever drives the game
//! (the integration tests here, or a caller's own loop).

pub mod agent;
pub mod board;
pub mod sentence;

pub use agent::MinesweeperAgent;
pub use board::{Minesweeper, MinesweeperBuilder};
pub use sentence::Sentence;
