//! Move execution and validation

use crate::board::Board;
use crate::error::{ChessBallError, ChessBallResult};
use crate::move_gen::legal_moves;
use crate::types::{Move, Player};

/// Check if `mv` is one of `player`'s legal moves on `board`
pub fn is_legal_move(board: &Board, player: Player, mv: &Move) -> bool {
    legal_moves(board, player).contains(mv)
}

/// Execute a move after validating it
///
/// # Errors
///
/// Returns [`ChessBallError::IllegalMove`] if `mv` is not legal for `player`.
pub fn do_move(board: &Board, player: Player, mv: &Move) -> ChessBallResult<Board> {
    if !is_legal_move(board, player, mv) {
        return Err(ChessBallError::IllegalMove { player, mv: *mv });
    }
    mv.apply(board)
}
