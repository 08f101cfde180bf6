//! ChessBall AI opponent
//!
//! [`AiPlayer`] runs the engine search with the configured depth, pruning,
//! time budget and weights, logs each decision under the `[AI]` tag and keeps
//! [`AiStatistics`] about its last move.

pub mod player;
pub mod statistics;

pub use player::{AiMove, AiPlayer};
pub use statistics::AiStatistics;
