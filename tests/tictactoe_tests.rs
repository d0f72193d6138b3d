//! Tic-tac-toe integration tests: minimax play quality over whole games.

use puzzle_agents::core::{AgentRng, Cell};
use puzzle_agents::tictactoe::{best_move, Board, Mark};

/// Play minimax for `minimax_side` against a seeded random opponent and
/// return the finished board.
fn minimax_vs_random(minimax_side: Mark, seed: u64) -> Board {
    let mut rng = AgentRng::new(seed);
    let mut board = Board::new();

    while !board.is_terminal() {
        let mv = if board.to_move() == minimax_side {
            best_move(&board).expect("non-terminal board has a best move")
        } else {
            let moves = board.moves();
            *rng.choose(&moves).expect("non-terminal board has moves")
        };
        board = board.play(mv).unwrap();
    }
    board
}

#[test]
fn test_minimax_x_never_loses_to_random() {
    for seed in 0..30u64 {
        let board = minimax_vs_random(Mark::X, seed);
        assert_ne!(board.winner(), Some(Mark::O), "seed {seed}: X lost");
    }
}

#[test]
fn test_minimax_o_never_loses_to_random() {
    for seed in 0..30u64 {
        let board = minimax_vs_random(Mark::O, seed);
        assert_ne!(board.winner(), Some(Mark::X), "seed {seed}: O lost");
    }
}

#[test]
fn test_minimax_vs_minimax_draws() {
    let mut board = Board::new();
    while let Some(mv) = best_move(&board) {
        board = board.play(mv).unwrap();
    }
    assert!(board.is_full());
    assert_eq!(board.winner(), None);
}

#[test]
fn test_minimax_punishes_a_blunder() {
    // After X takes the center, O replies on an edge instead of a corner:
    // a known losing reply. Optimal X must convert.
    let mut board = Board::new()
        .play(Cell::new(1, 1))
        .unwrap()
        .play(Cell::new(0, 1))
        .unwrap();

    while !board.is_terminal() {
        let mv = best_move(&board).unwrap();
        board = board.play(mv).unwrap();
    }
    assert_eq!(board.winner(), Some(Mark::X));
}

#[test]
fn test_full_game_move_legality() {
    let mut board = Board::new();
    let mut plies = 0;

    while let Some(mv) = best_move(&board) {
        assert!(board.moves().contains(&mv));
        board = board.play(mv).unwrap();
        plies += 1;
        assert!(plies <= 9, "More plies than squares");
    }
    assert!(board.is_terminal());
}
