//! ChessBall host library
//!
//! Wraps the rules and search engine (`chessball_engine`) with the pieces an
//! application needs around it: persisted engine settings, tracing setup, an
//! AI player that reports what it thought about, and a match session that
//! tracks turns and outcomes.
//!
//! # Module Organization
//!
//! - `core` - settings persistence and logging
//! - `game` - match session, AI player, error types

pub mod core;
pub mod game;

pub use chessball_engine as engine;
