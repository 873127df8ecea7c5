//! Fail-soft alpha-beta over the same scoring as full minimax.
//!
//! A returned value strictly inside `(alpha, beta)` is exact. A value at
//! or below `alpha` is an upper bound on the true score, one at or above
//! `beta` a lower bound.

use super::SearchStats;
use super::minimax::Minimax;
use crate::tictactoe::Board;

impl Minimax {
    pub(super) fn alpha_beta(
        &self,
        board: &Board,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        stats: &mut SearchStats,
    ) -> i32 {
        stats.nodes += 1;
        if let Some(score) = self.terminal_score(board, depth) {
            return score;
        }

        let mover = self.mover(maximizing);
        if maximizing {
            let mut best = i32::MIN;
            for pos in board.empty_positions() {
                let child = board.with(pos, mover);
                let score = self.alpha_beta(&child, depth + 1, false, alpha, beta, stats);
                best = best.max(score);
                alpha = alpha.max(best);
                if alpha >= beta {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for pos in board.empty_positions() {
                let child = board.with(pos, mover);
                let score = self.alpha_beta(&child, depth + 1, true, alpha, beta, stats);
                best = best.min(score);
                beta = beta.min(best);
                if alpha >= beta {
                    break;
                }
            }
            best
        }
    }
}
