//! Knights and Knaves: truth-teller/liar puzzles over the `logic` module.

pub mod puzzle;
pub mod puzzles;

pub use puzzle::{Character, Puzzle, Role};
pub use puzzles::{puzzle_0, puzzle_1, puzzle_2, puzzle_3};
