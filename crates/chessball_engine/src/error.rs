//! Error types for the ChessBall engine
//!
//! Provides custom error types for board construction, notation parsing and
//! move replay. Generation, terminal detection and search never fail: an empty
//! result is how they report "nothing found".

use crate::types::{Move, Player};
use thiserror::Error;

/// Errors that can occur in the ChessBall engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessBallError {
    /// Coordinate outside the grid
    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Rule set with a grid too small to play on
    #[error("Unsupported board dimensions {rows}x{cols} (need at least 2 rows and 3 columns)")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Notation with the wrong number of rows
    #[error("Expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    /// Notation row with the wrong number of tokens
    #[error("Expected {expected} columns on row {row}, found {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Unknown or incoherent cell token
    #[error("Invalid token '{token}' at ({row}, {col})")]
    InvalidToken {
        token: String,
        row: usize,
        col: usize,
    },

    /// Replaying a move whose mover cell is empty
    #[error("No piece at ({row}, {col}) to move")]
    EmptySource { row: usize, col: usize },

    /// Move not available to the player in the given position
    #[error("Illegal move for {player}: {mv}")]
    IllegalMove { player: Player, mv: Move },
}

/// Result type alias for ChessBall engine operations
pub type ChessBallResult<T> = Result<T, ChessBallError>;
