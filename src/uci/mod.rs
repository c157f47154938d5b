//! Text front-ends: the UCI protocol and an interactive console game.
//!
//! Everything here is presentation glue; the engine core never depends on it.

pub mod play;
pub mod protocol;

pub use protocol::Uci;
