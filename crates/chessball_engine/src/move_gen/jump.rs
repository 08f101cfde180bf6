//! Attacker jumps
//!
//! An attacker leaps over an adjacent non-ball piece of either side onto the
//! empty cell directly beyond it. The jumped piece does not move.

use crate::board::Board;
use crate::types::{Cell, Direction, Move};

pub fn forward(board: &Board, from: Cell, dir: Direction) -> Option<Move> {
    let over = board.step(from, dir, 1)?;
    if !board.piece_at(over).is_some_and(|p| !p.is_ball()) {
        return None;
    }
    let to = board.step(from, dir, 2)?;
    board.is_empty(to).then_some(Move::Jump { from, to, over })
}

pub fn backward(board: &Board, at: Cell, dir: Direction) -> Option<Move> {
    let over = board.step(at, dir, -1)?;
    if !board.piece_at(over).is_some_and(|p| !p.is_ball()) {
        return None;
    }
    let from = board.step(at, dir, -2)?;
    board.is_empty(from).then_some(Move::Jump { from, to: at, over })
}
