//! Forward and retrograde move generation
//!
//! Both generators scan the board row-major and, for every piece of the side
//! in question, try each of the eight directions in [`DIRECTIONS`] order. Per
//! direction the move kinds are tried as simple, push, jump, tackle.
//!
//! ## Module Organization
//!
//! - `simple` - steps to an adjacent empty cell
//! - `push` - ball pushes and the forbidden-column rule
//! - `jump` - attacker leaps (rule-set option)
//! - `tackle` - defender shoves (rule-set option)
//!
//! ## Mirror Exactness
//!
//! Each submodule pairs a `forward` rule with the `backward` rule obtained by
//! inverting it, and both emit the same [`Move`] record. Successor boards are
//! built with [`Move::apply`] semantics and predecessor boards with
//! [`Move::revert`] semantics, so for every pair `(m, B)` produced from `A`,
//! [`previous_moves_for`]`(B)` contains `(m, A)` and vice versa.

mod jump;
mod push;
mod simple;
mod tackle;

use crate::board::Board;
use crate::constants::DIRECTIONS;
use crate::types::{Cell, Direction, Move, Piece, Player};

/// All legal moves for `player`, each paired with the resulting board
pub fn moves_for(board: &Board, player: Player) -> Vec<(Move, Board)> {
    legal_moves(board, player)
        .into_iter()
        .map(|mv| {
            let next = mv.apply_unchecked(board);
            (mv, next)
        })
        .collect()
}

/// All move records available to `player`, in generation order, without
/// building the successor boards
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let rules = board.rules();
    let mut moves = Vec::new();

    for (from, piece) in board.pieces_of(player) {
        for &dir in &DIRECTIONS {
            moves.extend(simple::forward(board, from, dir));
            moves.extend(push::forward(board, from, dir));
            match piece {
                Piece::Attacker(_) if rules.jumps() => {
                    moves.extend(jump::forward(board, from, dir));
                }
                Piece::Defender(_) if rules.tackles() => {
                    moves.extend(tackle::forward(board, from, dir, player));
                }
                _ => {}
            }
        }
    }

    moves
}

/// Every `(move, predecessor)` such that `player` playing `move` from
/// `predecessor` yields `board`
pub fn previous_moves_for(board: &Board, player: Player) -> Vec<(Move, Board)> {
    retro_moves(board, player)
        .into_iter()
        .map(|mv| {
            let prev = mv.revert_unchecked(board);
            (mv, prev)
        })
        .collect()
}

fn retro_moves(board: &Board, player: Player) -> Vec<Move> {
    let rules = board.rules();
    let mut moves = Vec::new();

    for (at, piece) in board.pieces_of(player) {
        for &dir in &DIRECTIONS {
            moves.extend(simple::backward(board, at, dir));
            moves.extend(push::backward(board, at, dir));
            match piece {
                Piece::Attacker(_) if rules.jumps() => {
                    moves.extend(jump::backward(board, at, dir));
                }
                Piece::Defender(_) if rules.tackles() => {
                    moves.extend(tackle::backward(board, at, dir, player));
                }
                _ => {}
            }
        }
    }

    moves
}

/// Number of legal moves, used by the mobility feature
pub fn move_count(board: &Board, player: Player) -> usize {
    legal_moves(board, player).len()
}

/// Push from `from` along `dir`, if legal
pub(crate) fn push_along(board: &Board, from: Cell, dir: Direction) -> Option<Move> {
    push::forward(board, from, dir)
}

/// Tackle by `player`'s defender on `from` along `dir`, if legal
pub(crate) fn tackle_along(
    board: &Board,
    from: Cell,
    dir: Direction,
    player: Player,
) -> Option<Move> {
    tackle::forward(board, from, dir, player)
}
