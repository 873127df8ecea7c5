//! Shared helpers for integration tests.

use std::collections::HashSet;
use tictactoe_minimax::{Board, Player, apply_move, evaluate};

/// Every position reachable by legal play from the empty board,
/// paired with the mark to move. Terminal positions are included.
pub fn reachable_positions() -> Vec<(Board, Player)> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut stack = vec![(Board::new(), Player::X)];

    while let Some((board, to_move)) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        out.push((board, to_move));
        if evaluate(&board).is_some() {
            continue;
        }
        for pos in board.empty_positions() {
            let next = apply_move(&board, pos.to_index(), to_move).unwrap();
            stack.push((next, to_move.opponent()));
        }
    }

    out
}

/// Parses a board written as nine row-major squares.
pub fn board(text: &str) -> Board {
    text.parse().unwrap()
}
