//! Fixed-depth alpha-beta search over minimax.

mod alphabeta;
mod searcher;
mod types;

pub use searcher::Searcher;
pub use types::{SearchStats, DEFAULT_DEPTH, INFINITY};
