//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search engine and the session share one definition
//! of a legal move and a finished game.

pub mod draw;
pub mod outcome;
pub mod placement;
pub mod win;

pub use draw::is_full;
pub use outcome::{Outcome, evaluate};
pub(crate) use outcome::outcome_of;
pub use placement::{apply_move, new_board};
pub use win::{LINES, check_winner};
