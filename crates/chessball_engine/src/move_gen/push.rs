//! Ball pushes
//!
//! A piece adjacent to the ball steps onto the ball's cell and the ball moves
//! one cell further in the same direction. The ball's destination must be on
//! the grid, empty, and outside the forbidden edge columns.

use crate::board::Board;
use crate::types::{Cell, Direction, Move, Piece};

/// Push from `from` along `dir`, if the adjacent cell holds the ball
pub fn forward(board: &Board, from: Cell, dir: Direction) -> Option<Move> {
    let to = board.step(from, dir, 1)?;
    if board.piece_at(to) != Some(Piece::Ball) {
        return None;
    }
    let ball_to = board.step(to, dir, 1)?;
    if !board.is_empty(ball_to) || board.is_forbidden_col(ball_to.col) {
        return None;
    }
    Some(Move::Push { from, to, ball_to })
}

/// Push along `dir` that leaves the piece on `at` with the ball one cell ahead.
///
/// The predecessor has the piece one cell behind `at` and the ball on `at`.
/// Both ball cells must be outside the forbidden columns, since a legal push
/// never starts or ends there.
pub fn backward(board: &Board, at: Cell, dir: Direction) -> Option<Move> {
    let ball_to = board.step(at, dir, 1)?;
    if board.piece_at(ball_to) != Some(Piece::Ball) || board.is_forbidden_col(ball_to.col) {
        return None;
    }
    if board.is_forbidden_col(at.col) {
        return None;
    }
    let from = board.step(at, dir, -1)?;
    board.is_empty(from).then_some(Move::Push {
        from,
        to: at,
        ball_to,
    })
}
