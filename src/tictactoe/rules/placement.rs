//! Move application.

use super::super::{Board, MoveError, Player, Position};
use tracing::{debug, instrument};

/// Returns an empty board.
pub fn new_board() -> Board {
    Board::new()
}

/// Places `mark` at `index`, returning the resulting board.
///
/// The input board is never modified, so a rejected move leaves
/// the caller's state exactly as it was.
///
/// # Errors
///
/// - [`MoveError::OutOfRange`] if `index` is not 0-8.
/// - [`MoveError::SquareOccupied`] if the square already holds a mark.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn apply_move(board: &Board, index: usize, mark: Player) -> Result<Board, MoveError> {
    let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
    if !board.is_empty(pos) {
        debug!(position = %pos, "Rejected move on occupied square");
        return Err(MoveError::SquareOccupied(pos));
    }
    Ok(board.with(pos, mark))
}
