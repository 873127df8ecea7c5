//! Tic-tac-toe rules and optimal play.

mod action;
pub mod invariants;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use action::{Move, MoveError};
pub use position::Position;
pub use rules::{Outcome, apply_move, evaluate, is_full, new_board};
pub use search::{Minimax, ScoredMove, SearchError, Strategy};
pub use types::{Board, BoardParseError, Player, Square};
