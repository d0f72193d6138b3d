//! Tic-tac-toe: board, rules, and an optimal minimax player.

pub mod board;
pub mod minimax;

pub use board::{Board, Mark, SIDE};
pub use minimax::{best_move, value};
