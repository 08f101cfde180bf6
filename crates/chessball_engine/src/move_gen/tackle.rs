//! Defender tackles
//!
//! A defender steps onto an adjacent opposing piece's cell and shoves that
//! piece one cell further in the same direction. The shoved piece needs an
//! empty on-grid landing cell. The ball cannot be tackled.

use crate::board::Board;
use crate::types::{Cell, Direction, Move, Player};

pub fn forward(board: &Board, from: Cell, dir: Direction, player: Player) -> Option<Move> {
    let to = board.step(from, dir, 1)?;
    if !board
        .piece_at(to)
        .is_some_and(|p| p.belongs_to(player.opponent()))
    {
        return None;
    }
    let displaced_to = board.step(from, dir, 2)?;
    board.is_empty(displaced_to).then_some(Move::Tackle {
        from,
        to,
        displaced_to,
    })
}

/// Tackle that leaves the defender on `at` with the shoved opponent one cell
/// ahead along `dir`.
pub fn backward(board: &Board, at: Cell, dir: Direction, player: Player) -> Option<Move> {
    let displaced_to = board.step(at, dir, 1)?;
    if !board
        .piece_at(displaced_to)
        .is_some_and(|p| p.belongs_to(player.opponent()))
    {
        return None;
    }
    let from = board.step(at, dir, -1)?;
    board.is_empty(from).then_some(Move::Tackle {
        from,
        to: at,
        displaced_to,
    })
}
