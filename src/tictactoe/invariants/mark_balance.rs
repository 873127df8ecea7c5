//! Mark balance invariant: X moves first and players alternate.

use super::super::{Board, Player};
use super::Invariant;
use tracing::warn;

/// Invariant: X has as many marks as O, or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}
