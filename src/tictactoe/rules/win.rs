//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines, in scan order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in [`LINES`] order,
/// `None` if no line is complete.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Player> {
    winner_of(board)
}

/// Same as [`check_winner`] without opening a span.
pub(crate) fn winner_of(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&line| line_owner(board, line))
}

/// Returns the player holding all three squares of `line`, if any.
pub(crate) fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Player> {
    match board.get(a) {
        Square::Occupied(player)
            if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
        {
            Some(player)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "..O.O.O..".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XXO......".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Unreachable in play, but the scan order still decides.
        let board: Board = "OOOXXX...".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
    }
}
