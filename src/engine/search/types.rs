//! Search constants and statistics.

/// Sentinel bound; strictly dominates any evaluator output (mate is 10000).
pub const INFINITY: i32 = 1_000_000;

/// Default look-ahead in plies when the caller does not specify one.
pub const DEFAULT_DEPTH: u32 = 3;

/// Node counters for the last completed search.
#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    /// Nodes visited by the recursive value function.
    pub nodes: u64,
    /// Nodes scored statically (depth 0 or terminal).
    pub leaves: u64,
    /// Move loops stopped early by a beta/alpha cutoff.
    pub cutoffs: u64,
}
