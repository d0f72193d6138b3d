//! Minimax search for tic-tac-toe.
//!
//! Plain exhaustive minimax: the state space is small enough that pruning
//! buys nothing worth the code. X maximizes `Board::utility`, O minimizes.

use crate::core::Cell;
use crate::tictactoe::{Board, Mark};

/// Minimax value of a position: the utility reached with both sides
/// playing optimally.
#[must_use]
pub fn value(board: &Board) -> i8 {
    if board.is_terminal() {
        return board.utility();
    }

    let child_values = board.moves().into_iter().map(|m| value(&board.place(m)));
    match board.to_move() {
        Mark::X => child_values.max(),
        Mark::O => child_values.min(),
    }
    .expect("Non-terminal board has moves")
}

/// An optimal move for the side to move, or `None` on a terminal board.
///
/// When several moves are equally good, any of them may be returned.
///
/// ```
/// use puzzle_agents::core::Cell;
/// use puzzle_agents::tictactoe::{best_move, Board};
///
/// // O must block X's completed-two row.
/// let board = Board::new()
///     .play(Cell::new(0, 0)).unwrap()
///     .play(Cell::new(1, 1)).unwrap()
///     .play(Cell::new(0, 1)).unwrap();
/// assert_eq!(best_move(&board), Some(Cell::new(0, 2)));
/// ```
#[must_use]
pub fn best_move(board: &Board) -> Option<Cell> {
    if board.is_terminal() {
        return None;
    }

    let moves = board.moves();
    match board.to_move() {
        Mark::X => moves.into_iter().max_by_key(|&m| value(&board.place(m))),
        Mark::O => moves.into_iter().min_by_key(|&m| value(&board.place(m))),
    }
}
