//! Adversarial search for the computer's move.
//!
//! The engine scores positions from the maximizer's point of view:
//! `10 - depth` for a maximizer win, `depth - 10` for a minimizer win,
//! `0` for a draw. The depth term makes the maximizer take the fastest
//! win and the minimizer drag a lost game out as long as possible.

mod alpha_beta;
mod minimax;

pub use minimax::{Minimax, ScoredMove};

use serde::{Deserialize, Serialize};

/// Score of a win found at depth zero.
pub const WIN_SCORE: i32 = 10;

/// How the game tree is walked.
///
/// Both strategies return the same move on every position; alpha-beta
/// skips subtrees that cannot change the choice.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Strategy {
    /// Full-width minimax with no pruning.
    #[default]
    Exhaustive,
    /// Fail-soft alpha-beta pruning.
    AlphaBeta,
}

/// Search requested on a board with no move to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The game is already won or drawn.
    #[display("No legal move: the game is already over")]
    NoLegalMove,
}

impl std::error::Error for SearchError {}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions scored, terminal ones included.
    pub nodes: u64,
}
