//! Tests for the rules engine public API.

mod common;

use common::{board, reachable_positions};
use tictactoe_minimax::invariants::{BoardInvariants, InvariantSet};
use tictactoe_minimax::{
    Board, MoveError, Outcome, Player, Position, Square, apply_move, check_winner, evaluate,
    is_full, new_board,
};

#[test]
fn test_new_board_has_nine_empty_squares() {
    let board = new_board();
    assert_eq!(board.squares(), &[Square::Empty; 9]);
    assert_eq!(evaluate(&board), None);
}

#[test]
fn test_apply_move_only_touches_target() {
    let before = board("X...O....");
    let after = apply_move(&before, 8, Player::X).unwrap();
    for pos in Position::ALL {
        if pos == Position::BottomRight {
            assert_eq!(after.get(pos), Square::Occupied(Player::X));
        } else {
            assert_eq!(after.get(pos), before.get(pos));
        }
    }
}

#[test]
fn test_apply_move_on_occupied_square_is_rejected() {
    let before = board("X...O....");
    for index in [0, 4] {
        let result = apply_move(&before, index, Player::X);
        assert!(matches!(result, Err(MoveError::SquareOccupied(_))));
    }
    assert_eq!(before, board("X...O...."));
}

#[test]
fn test_apply_move_out_of_range_is_rejected() {
    assert_eq!(
        apply_move(&new_board(), 42, Player::O),
        Err(MoveError::OutOfRange(42))
    );
}

#[test]
fn test_all_eight_lines_win() {
    let lines = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];
    for line in lines {
        let mut board = Board::new();
        for index in line {
            board = apply_move(&board, index, Player::O).unwrap();
        }
        assert_eq!(evaluate(&board), Some(Outcome::Winner(Player::O)), "{line:?}");
    }
}

#[test]
fn test_full_board_without_winner_is_draw() {
    let board = board("XOXXOOOXX");
    assert!(is_full(&board));
    assert_eq!(check_winner(&board), None);
    assert_eq!(evaluate(&board), Some(Outcome::Draw));
}

#[test]
fn test_evaluate_twice_gives_same_answer() {
    for (position, _) in reachable_positions() {
        assert_eq!(evaluate(&position), evaluate(&position));
    }
}

#[test]
fn test_reachable_positions_are_consistent() {
    let positions = reachable_positions();
    // Known count of legal tic-tac-toe positions, empty board included.
    assert_eq!(positions.len(), 5478);

    for (position, _) in &positions {
        assert!(BoardInvariants::check_all(position).is_ok(), "{}", position.compact());

        match evaluate(position) {
            Some(Outcome::Winner(player)) => {
                assert_eq!(check_winner(position), Some(player));
            }
            Some(Outcome::Draw) => {
                assert!(is_full(position));
                assert_eq!(check_winner(position), None);
            }
            None => {
                assert!(!is_full(position));
                assert_eq!(check_winner(position), None);
            }
        }

        let outcome = evaluate(position);
        assert_eq!(outcome.and_then(|o| o.winner()), check_winner(position));
        assert_eq!(
            outcome.is_some_and(|o| o.is_draw()),
            is_full(position) && check_winner(position).is_none()
        );
    }
}

#[test]
fn test_terminal_positions_split() {
    let positions = reachable_positions();
    let count = |wanted: Option<Outcome>| {
        positions
            .iter()
            .filter(|(b, _)| evaluate(b) == wanted)
            .count()
    };
    assert_eq!(count(Some(Outcome::Winner(Player::X))), 626);
    assert_eq!(count(Some(Outcome::Winner(Player::O))), 316);
    assert_eq!(count(Some(Outcome::Draw)), 16);
}
