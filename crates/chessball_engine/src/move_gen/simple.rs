//! Simple moves
//!
//! Any piece except the ball may step to an adjacent empty cell in any of the
//! eight directions.

use crate::board::Board;
use crate::types::{Cell, Direction, Move};

/// Simple move from `from` along `dir`, if the target is empty
pub fn forward(board: &Board, from: Cell, dir: Direction) -> Option<Move> {
    let to = board.step(from, dir, 1)?;
    board.is_empty(to).then_some(Move::Simple { from, to })
}

/// Simple move that could have brought the piece now on `at` there along `dir`
pub fn backward(board: &Board, at: Cell, dir: Direction) -> Option<Move> {
    let from = board.step(at, dir, -1)?;
    board.is_empty(from).then_some(Move::Simple { from, to: at })
}
