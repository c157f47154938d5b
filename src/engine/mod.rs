//! Chess engine components
//!
//! This module contains the core engine functionality:
//! - Static evaluation (material + positional heuristics)
//! - Fixed-depth alpha-beta search

pub mod eval;
pub mod search;

pub use eval::{evaluate, DRAW_SCORE, MATE_SCORE};
pub use search::{SearchStats, Searcher, DEFAULT_DEPTH, INFINITY};
