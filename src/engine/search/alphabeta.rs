//! Recursive alpha-beta value function.

use shakmaty::{Chess, Color, Position};

use crate::engine::eval::evaluate;

use super::searcher::Searcher;
use super::types::INFINITY;

impl Searcher {
    /// Alpha-beta value of `pos` searched `depth` plies deep.
    ///
    /// White maximizes and Black minimizes over the evaluator's
    /// White-positive score. Pruning kicks in exactly when the running
    /// bounds cross (`beta <= alpha`) and never changes the returned value
    /// relative to a full minimax at the same depth.
    pub fn search_value(&mut self, pos: &Chess, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 || pos.is_game_over() {
            self.stats.leaves += 1;
            return evaluate(pos);
        }

        let legals = pos.legal_moves();
        if legals.is_empty() {
            // Unreachable with a correct rules backend (no moves implies
            // game over); score statically rather than fault.
            self.stats.leaves += 1;
            return evaluate(pos);
        }

        if pos.turn() == Color::White {
            let mut best = -INFINITY;
            for mv in &legals {
                let child = pos.clone().play(mv).unwrap();
                let value = self.search_value(&child, depth - 1, alpha, beta);
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for mv in &legals {
                let child = pos.clone().play(mv).unwrap();
                let value = self.search_value(&child, depth - 1, alpha, beta);
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }
}
