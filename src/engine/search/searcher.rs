//! Searcher: root driver and move selection.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use shakmaty::{Chess, Color, Move, Position};

use super::types::{SearchStats, INFINITY};

/// Fixed-depth alpha-beta searcher.
///
/// Holds no state between searches apart from the stats of the last run and
/// the rng backing the root fallback. One search mutates one `Searcher`;
/// concurrent searches need independent instances.
pub struct Searcher {
    pub(super) stats: SearchStats,
    rng: StdRng,
}

impl Searcher {
    pub fn new() -> Self {
        Searcher {
            stats: SearchStats::default(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Searcher with a fixed rng seed, so the fallback path is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Searcher {
            stats: SearchStats::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Counters from the most recent `search_root`/`best_move` call.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best move for the side to move, searched `depth` plies deep.
    ///
    /// Returns `None` only when there is no legal move; callers should
    /// check for game over before asking for a move.
    pub fn best_move(&mut self, pos: &Chess, depth: u32) -> Option<Move> {
        self.search_root(pos, depth).map(|(mv, _)| mv)
    }

    /// Best move together with its search value.
    ///
    /// The first move to strictly improve on the running best is kept;
    /// later moves that merely tie are not re-selected, so the result is
    /// deterministic for a fixed move-enumeration order.
    pub fn search_root(&mut self, pos: &Chess, depth: u32) -> Option<(Move, i32)> {
        let legals = pos.legal_moves();
        if legals.is_empty() {
            return None;
        }

        // Depth 0 at the root would select nothing; look ahead at least one ply.
        let depth = depth.max(1);
        self.stats = SearchStats::default();

        let maximizing = pos.turn() == Color::White;
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best_value = if maximizing { -INFINITY } else { INFINITY };
        let mut best_move: Option<Move> = None;

        for mv in &legals {
            let child = pos.clone().play(mv).unwrap();
            let value = self.search_value(&child, depth - 1, alpha, beta);

            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_move = Some(mv.clone());
                }
                alpha = alpha.max(best_value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_move = Some(mv.clone());
                }
                beta = beta.min(best_value);
            }
        }

        // The first legal move always beats the infinite sentinel, so this
        // fallback is unreachable in correct operation; kept as a last
        // resort so a scoring bug degrades to a random legal move.
        let best_move = match best_move {
            Some(mv) => mv,
            None => legals.choose(&mut self.rng)?.clone(),
        };

        Some((best_move, best_value))
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
