//! Error types for game module
//!
//! Provides custom error types for match flow: engine rejections, moves
//! attempted after the game ended, and positions with nothing to play.

use chessball_engine::{ChessBallError, Player};

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Engine rejected the request (illegal move, bad board)
    #[error(transparent)]
    Engine(#[from] ChessBallError),

    /// Move attempted after the ball reached a goal row
    #[error("Game is over: {winner} won")]
    GameOver { winner: Player },

    /// Side to move has no legal move
    #[error("{player} has no legal move")]
    NoLegalMove { player: Player },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
