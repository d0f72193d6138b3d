//! The four classic puzzles.
//!
//! These are the standard exercise set, encoded with [`Puzzle::says`].
//! Expected solutions are asserted by the integration tests.

use super::puzzle::Puzzle;
use crate::logic::Formula;

const A: usize = 0;
const B: usize = 1;
const C: usize = 2;

/// Puzzle 0.
///
/// A says "I am both a knight and a knave."
#[must_use]
pub fn puzzle_0() -> Puzzle {
    let mut puzzle = Puzzle::new(&["A"]);
    let claim = puzzle.both(A);
    puzzle.says(A, claim);
    puzzle
}

/// Puzzle 1.
///
/// A says "We are both knaves." B says nothing.
#[must_use]
pub fn puzzle_1() -> Puzzle {
    let mut puzzle = Puzzle::new(&["A", "B"]);
    let claim = Formula::and([puzzle.knave(A), puzzle.knave(B)]);
    puzzle.says(A, claim);
    puzzle
}

/// Puzzle 2.
///
/// A says "We are the same kind." B says "We are of different kinds."
#[must_use]
pub fn puzzle_2() -> Puzzle {
    let mut puzzle = Puzzle::new(&["A", "B"]);
    let a_claim = puzzle.same_kind(A, B);
    puzzle.says(A, a_claim);
    let b_claim = puzzle.different_kinds(A, B);
    puzzle.says(B, b_claim);
    puzzle
}

/// Puzzle 3.
///
/// A says either "I am a knight." or "I am a knave.", but you don't know
/// which. B says "A said 'I am a knave'." and "C is a knave." C says "A is
/// a knight."
#[must_use]
pub fn puzzle_3() -> Puzzle {
    let mut puzzle = Puzzle::new(&["A", "B", "C"]);

    // Whichever sentence A uttered, it was "knight or knave" at weakest.
    let a_claim = Formula::or([puzzle.knight(A), puzzle.knave(A)]);
    puzzle.says(A, a_claim);

    // B's two statements taken together: A is a knave and C is a knave.
    let b_claim = Formula::and([puzzle.knave(A), puzzle.knave(C)]);
    puzzle.says(B, b_claim);

    let c_claim = puzzle.knight(A);
    puzzle.says(C, c_claim);

    puzzle
}
