//! Tic-tac-toe board and rules.
//!
//! The board is immutable from the caller's point of view: `play` returns
//! the successor position and leaves the original untouched, which is what
//! the minimax search wants.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Cell, GridSize};
use crate::error::{Error, Result};

/// Board side length.
pub const SIDE: usize = 3;

/// A player's mark. X always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other mark.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Row, column, and diagonal index triples.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3x3 tic-tac-toe position.
///
/// ```
/// use puzzle_agents::core::Cell;
/// use puzzle_agents::tictactoe::{Board, Mark};
///
/// let board = Board::new();
/// assert_eq!(board.to_move(), Mark::X);
///
/// let board = board.play(Cell::new(1, 1)).unwrap();
/// assert_eq!(board.to_move(), Mark::O);
/// assert_eq!(board.get(Cell::new(1, 1)), Some(Mark::X));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Option<Mark>; SIDE * SIDE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The empty starting position.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            squares: [None; SIDE * SIDE],
        }
    }

    /// Grid dimensions (always 3x3).
    #[must_use]
    pub fn size() -> GridSize {
        GridSize::new(SIDE, SIDE)
    }

    fn index(cell: Cell) -> usize {
        cell.row * SIDE + cell.col
    }

    /// Mark at a square, if any.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.squares[Self::index(cell)]
    }

    /// Whose turn it is.
    ///
    /// X moves first, so X is to move whenever both sides have placed the
    /// same number of marks.
    #[must_use]
    pub fn to_move(&self) -> Mark {
        let x_count = self.squares.iter().filter(|&&s| s == Some(Mark::X)).count();
        let o_count = self.squares.iter().filter(|&&s| s == Some(Mark::O)).count();
        if x_count == o_count {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// All empty squares, in row-major order.
    #[must_use]
    pub fn moves(&self) -> SmallVec<[Cell; 9]> {
        Self::size()
            .cells()
            .filter(|&cell| self.get(cell).is_none())
            .collect()
    }

    /// Play the side to move onto `cell`, returning the successor position.
    ///
    /// Rejects out-of-bounds squares, occupied squares, and finished games.
    pub fn play(&self, cell: Cell) -> Result<Board> {
        if !Self::size().contains(cell) {
            return Err(Error::OutOfBounds {
                cell,
                grid: Self::size(),
            });
        }
        if self.is_terminal() {
            return Err(Error::GameOver);
        }
        if self.get(cell).is_some() {
            return Err(Error::SquareOccupied { cell });
        }
        Ok(self.place(cell))
    }

    /// Successor position without validation. Callers must pass an empty
    /// in-bounds square of a non-terminal position.
    pub(crate) fn place(&self, cell: Cell) -> Board {
        debug_assert!(Self::size().contains(cell));
        debug_assert!(self.get(cell).is_none());

        let mut squares = self.squares;
        squares[Self::index(cell)] = Some(self.to_move());
        Board { squares }
    }

    /// The winning mark, if any line is complete.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        for line in LINES {
            if let Some(mark) = self.squares[line[0]] {
                if self.squares[line[1]] == Some(mark) && self.squares[line[2]] == Some(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }

    /// Whether every square is marked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(Option::is_some)
    }

    /// Whether the game is over: someone won or the board is full.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Position value from X's point of view: +1 X won, -1 O won, 0
    /// otherwise (draw or unfinished).
    #[must_use]
    pub fn utility(&self) -> i8 {
        match self.winner() {
            Some(Mark::X) => 1,
            Some(Mark::O) => -1,
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Play out a sequence of moves, panicking on an illegal one.
    fn play_all(moves: &[(usize, usize)]) -> Board {
        moves.iter().fold(Board::new(), |board, &(row, col)| {
            board.play(Cell::new(row, col)).unwrap()
        })
    }

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert_eq!(board.to_move(), Mark::X);
        assert_eq!(board.moves().len(), 9);
        assert!(!board.is_terminal());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_turns_alternate() {
        let board = Board::new();
        assert_eq!(board.to_move(), Mark::X);

        let board = board.play(Cell::new(0, 0)).unwrap();
        assert_eq!(board.to_move(), Mark::O);

        let board = board.play(Cell::new(1, 1)).unwrap();
        assert_eq!(board.to_move(), Mark::X);
    }

    #[test]
    fn test_play_does_not_mutate_original() {
        let board = Board::new();
        let _ = board.play(Cell::new(0, 0)).unwrap();
        assert_eq!(board.get(Cell::new(0, 0)), None);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let board = Board::new().play(Cell::new(0, 0)).unwrap();
        let err = board.play(Cell::new(0, 0)).unwrap_err();
        assert_eq!(
            err,
            Error::SquareOccupied {
                cell: Cell::new(0, 0)
            }
        );
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let board = Board::new();
        assert!(matches!(
            board.play(Cell::new(3, 0)),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_row_win() {
        // X: (0,0) (0,1) (0,2), O: (1,0) (1,1)
        let board = play_all(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(board.winner(), Some(Mark::X));
        assert!(board.is_terminal());
        assert_eq!(board.utility(), 1);
    }

    #[test]
    fn test_column_win() {
        // X: (0,0) (1,0) (2,0), O: (0,1) (0,2)
        let board = play_all(&[(0, 0), (0, 1), (1, 0), (0, 2), (2, 0)]);
        assert_eq!(board.winner(), Some(Mark::X));
    }

    #[test]
    fn test_diagonal_win_by_o() {
        // X: (0,1) (0,2) (2,1), O: (0,0) (1,1) (2,2)
        let board = play_all(&[(0, 1), (0, 0), (0, 2), (1, 1), (2, 1), (2, 2)]);
        assert_eq!(board.winner(), Some(Mark::O));
        assert_eq!(board.utility(), -1);
    }

    #[test]
    fn test_win_on_non_full_board_is_terminal() {
        let board = play_all(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(!board.is_full());
        assert!(board.is_terminal());
        assert_eq!(board.play(Cell::new(2, 2)).unwrap_err(), Error::GameOver);
    }

    #[test]
    fn test_draw() {
        // X O X / X O O / O X X
        let board = play_all(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ]);
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
        assert!(board.is_terminal());
        assert_eq!(board.utility(), 0);
    }

    #[test]
    fn test_moves_shrink() {
        let board = Board::new().play(Cell::new(1, 1)).unwrap();
        let moves = board.moves();
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Cell::new(1, 1)));
    }

    #[test]
    fn test_serialization() {
        let board = Board::new().play(Cell::new(2, 2)).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
