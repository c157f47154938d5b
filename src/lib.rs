pub mod engine;
pub mod uci;

pub use engine::eval::{evaluate, DRAW_SCORE, MATE_SCORE};
pub use engine::search::{SearchStats, Searcher, DEFAULT_DEPTH};
pub use shakmaty;
pub use uci::Uci;
