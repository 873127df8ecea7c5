//! Single winner invariant: the game stops at the first complete line.

use super::super::rules::LINES;
use super::super::rules::win::line_owner;
use super::super::{Board, Player};
use super::Invariant;
use tracing::warn;

/// Invariant: complete lines, if any, all belong to one player.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        let mut owners = LINES.iter().filter_map(|&line| line_owner(board, line));
        let valid = match owners.next() {
            Some(first) => owners.all(|p: Player| p == first),
            None => true,
        };
        if !valid {
            warn!(board = %board.compact(), "Both players hold a complete line");
        }
        valid
    }

    fn description() -> &'static str {
        "At most one player holds a complete line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_line_for_one_player_holds() {
        // X completes a row and a column with one move.
        let board: Board = "XXXXOOXOO".parse().unwrap();
        assert!(SingleWinnerInvariant::holds(&board));
    }

    #[test]
    fn test_lines_for_both_players_violate() {
        let board: Board = "XXXOOO...".parse().unwrap();
        assert!(!SingleWinnerInvariant::holds(&board));
    }
}
