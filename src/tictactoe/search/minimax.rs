//! Minimax move selection.

use super::{SearchError, SearchStats, Strategy, WIN_SCORE};
use crate::tictactoe::rules::{Outcome, evaluate, outcome_of};
use crate::tictactoe::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A legal move and its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Square the mark goes on.
    pub position: Position,
    /// Score from the maximizer's point of view.
    pub score: i32,
}

/// Optimal move picker.
///
/// `maximizer` is the mark the engine plays for; its opponent is the
/// minimizer. Either side can ask for a move: the maximizer gets the
/// highest-scoring square and the minimizer the lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    maximizer: Player,
    strategy: Strategy,
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new(Player::O, Strategy::default())
    }
}

impl Minimax {
    /// Creates an engine maximizing for `maximizer`.
    pub fn new(maximizer: Player, strategy: Strategy) -> Self {
        Self {
            maximizer,
            strategy,
        }
    }

    /// The mark whose wins score positive.
    pub fn maximizer(&self) -> Player {
        self.maximizer
    }

    /// The mark whose wins score negative.
    pub fn minimizer(&self) -> Player {
        self.maximizer.opponent()
    }

    /// How this engine walks the tree.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the best square for `mark` to play on `board`.
    ///
    /// Candidates are tried in index order and only a strictly better
    /// score replaces the current choice, so ties go to the lowest index.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NoLegalMove`] if the game is already over.
    #[instrument(skip(self, board), fields(board = %board.compact(), strategy = %self.strategy()))]
    pub fn best_move(&self, board: &Board, mark: Player) -> Result<Position, SearchError> {
        if evaluate(board).is_some() {
            return Err(SearchError::NoLegalMove);
        }

        let maximizing = mark == self.maximizer;
        let child_maximizing = mark.opponent() == self.maximizer;
        let mut stats = SearchStats::default();
        let mut best: Option<ScoredMove> = None;

        for position in board.empty_positions() {
            let child = board.with(position, mark);
            let score = match (self.strategy, best) {
                (Strategy::Exhaustive, _) => {
                    self.exhaustive(&child, 0, child_maximizing, &mut stats)
                }
                // The window only has to tell whether this child beats the
                // current choice; a fail-soft bound is enough to reject it.
                (Strategy::AlphaBeta, None) => {
                    self.alpha_beta(&child, 0, child_maximizing, i32::MIN, i32::MAX, &mut stats)
                }
                (Strategy::AlphaBeta, Some(current)) if maximizing => self.alpha_beta(
                    &child,
                    0,
                    child_maximizing,
                    current.score,
                    i32::MAX,
                    &mut stats,
                ),
                (Strategy::AlphaBeta, Some(current)) => self.alpha_beta(
                    &child,
                    0,
                    child_maximizing,
                    i32::MIN,
                    current.score,
                    &mut stats,
                ),
            };

            let improves = match best {
                None => true,
                Some(current) if maximizing => score > current.score,
                Some(current) => score < current.score,
            };
            if improves {
                best = Some(ScoredMove { position, score });
            }
        }

        let chosen = best.ok_or(SearchError::NoLegalMove)?;
        debug!(
            mark = %mark,
            position = %chosen.position,
            score = chosen.score,
            nodes = stats.nodes,
            "Search complete"
        );
        Ok(chosen.position)
    }

    /// Scores `board` with `maximizing` telling which side moves next.
    ///
    /// Always walks the full tree regardless of strategy.
    pub fn score(&self, board: &Board, depth: i32, maximizing: bool) -> i32 {
        let mut stats = SearchStats::default();
        self.exhaustive(board, depth, maximizing, &mut stats)
    }

    /// Every legal move for `mark` with its exact score, in index order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NoLegalMove`] if the game is already over.
    #[instrument(skip(self, board), fields(board = %board.compact()))]
    pub fn scored_moves(
        &self,
        board: &Board,
        mark: Player,
    ) -> Result<Vec<ScoredMove>, SearchError> {
        if evaluate(board).is_some() {
            return Err(SearchError::NoLegalMove);
        }

        let child_maximizing = mark.opponent() == self.maximizer;
        Ok(board
            .empty_positions()
            .map(|position| ScoredMove {
                position,
                score: self.score(&board.with(position, mark), 0, child_maximizing),
            })
            .collect())
    }

    /// Score of a finished game, `None` while moves remain.
    pub(super) fn terminal_score(&self, board: &Board, depth: i32) -> Option<i32> {
        match outcome_of(board)? {
            Outcome::Winner(player) if player == self.maximizer => Some(WIN_SCORE - depth),
            Outcome::Winner(_) => Some(depth - WIN_SCORE),
            Outcome::Draw => Some(0),
        }
    }

    /// The mark placed by the side to move.
    pub(super) fn mover(&self, maximizing: bool) -> Player {
        if maximizing {
            self.maximizer
        } else {
            self.minimizer()
        }
    }

    fn exhaustive(
        &self,
        board: &Board,
        depth: i32,
        maximizing: bool,
        stats: &mut SearchStats,
    ) -> i32 {
        stats.nodes += 1;
        if let Some(score) = self.terminal_score(board, depth) {
            return score;
        }

        let mover = self.mover(maximizing);
        let children = board
            .empty_positions()
            .map(|pos| self.exhaustive(&board.with(pos, mover), depth + 1, !maximizing, stats));

        // A non-terminal board has at least one empty square.
        if maximizing {
            children.max().unwrap_or(0)
        } else {
            children.min().unwrap_or(0)
        }
    }
}
