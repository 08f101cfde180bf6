//! Textual board notation
//!
//! One line per row, tokens separated by single spaces, every line ending in
//! `\n`. A token is an owner initial (`W`, `B`, `N`) followed by a kind
//! initial (`A`, `D`, `B`); `--` marks an empty cell.
//!
//! ```text
//! -- BD -- BD -- BD --
//! -- -- BA -- BA -- --
//! -- -- -- NB -- -- --
//! -- -- -- -- -- -- --
//! -- -- WA -- WA -- --
//! -- WD -- WD -- WD --
//! ```
//!
//! Parsing is strict: a wrong row or column count or an unknown token is an
//! error, never a guess. Blank lines and surrounding whitespace are ignored.

use crate::board::Board;
use crate::error::{ChessBallError, ChessBallResult};
use crate::rules::RuleSet;
use crate::types::{Cell, Piece};
use std::fmt;

/// Token for an empty cell
pub const EMPTY_TOKEN: &str = "--";

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match self.piece_at(Cell::new(row, col)) {
                    Some(piece) => f.write_str(&piece.token())?,
                    None => f.write_str(EMPTY_TOKEN)?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl Board {
    /// Parse the notation into a board played under `rules`
    pub fn parse(text: &str, rules: RuleSet) -> ChessBallResult<Board> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != rules.rows() {
            return Err(ChessBallError::RowCount {
                expected: rules.rows(),
                found: lines.len(),
            });
        }

        let mut board = Board::new(rules);
        for (row, line) in lines.iter().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != rules.cols() {
                return Err(ChessBallError::ColumnCount {
                    row,
                    expected: rules.cols(),
                    found: tokens.len(),
                });
            }
            for (col, token) in tokens.into_iter().enumerate() {
                if token == EMPTY_TOKEN {
                    continue;
                }
                let piece = Piece::from_token(token).ok_or_else(|| ChessBallError::InvalidToken {
                    token: token.to_string(),
                    row,
                    col,
                })?;
                board.put(Cell::new(row, col), Some(piece));
            }
        }
        Ok(board)
    }

    /// Build a board from a row-major grid of optional pieces
    pub fn from_grid(rules: RuleSet, grid: &[Vec<Option<Piece>>]) -> ChessBallResult<Board> {
        if grid.len() != rules.rows() {
            return Err(ChessBallError::RowCount {
                expected: rules.rows(),
                found: grid.len(),
            });
        }
        let mut board = Board::new(rules);
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != rules.cols() {
                return Err(ChessBallError::ColumnCount {
                    row,
                    expected: rules.cols(),
                    found: cells.len(),
                });
            }
            for (col, piece) in cells.iter().enumerate() {
                board.put(Cell::new(row, col), *piece);
            }
        }
        Ok(board)
    }
}
