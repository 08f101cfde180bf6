//! Game module - match flow around the engine
//!
//! # Module Organization
//!
//! - `session` - [`Match`]: current and previous board, turn, outcome
//! - `ai` - [`AiPlayer`] driving the engine search with [`EngineSettings`](crate::core::EngineSettings)
//! - `error` - [`GameError`] and [`GameResult`]

pub mod ai;
pub mod error;
pub mod session;

pub use ai::{AiMove, AiPlayer, AiStatistics};
pub use error::{GameError, GameResult};
pub use session::Match;
