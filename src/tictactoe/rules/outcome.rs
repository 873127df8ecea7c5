//! Terminal-state evaluation.

use super::super::{Board, Player};
use super::is_full;
use super::win::winner_of;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a finished game.
///
/// An ongoing game has no outcome; [`evaluate`] returns `None` for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Derives the outcome of `board`.
///
/// A complete line beats a full board, so a ninth move that wins
/// is a win and not a draw.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Option<Outcome> {
    outcome_of(board)
}

/// Same as [`evaluate`] without opening a span.
///
/// Search calls this at every node of the tree.
pub(crate) fn outcome_of(board: &Board) -> Option<Outcome> {
    if let Some(winner) = winner_of(board) {
        Some(Outcome::Winner(winner))
    } else if is_full(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}
