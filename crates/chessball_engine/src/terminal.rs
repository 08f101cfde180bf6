//! Win detection and one-ply blocking search
//!
//! A move wins when the resulting board has the ball on the mover's goal row.
//! Only pushes move the ball, so only pushes can win, but the check is made on
//! the resulting board rather than on the move kind.

use crate::board::Board;
use crate::move_gen::moves_for;
use crate::types::{Move, Player};

/// Whether the ball rests on `player`'s goal row
#[inline]
pub fn ball_on_goal(board: &Board, player: Player) -> bool {
    board
        .find_ball()
        .is_some_and(|ball| ball.row == board.goal_row(player))
}

/// Moves that put the ball on `player`'s goal row, in generation order
pub fn winning_moves(board: &Board, player: Player) -> Vec<Move> {
    moves_for(board, player)
        .into_iter()
        .filter(|(_, next)| ball_on_goal(next, player))
        .map(|(mv, _)| mv)
        .collect()
}

/// First winning move together with the board it produces
pub fn first_winning_move(board: &Board, player: Player) -> Option<(Move, Board)> {
    moves_for(board, player)
        .into_iter()
        .find(|(_, next)| ball_on_goal(next, player))
}

#[inline]
pub fn has_winning_move(board: &Board, player: Player) -> bool {
    first_winning_move(board, player).is_some()
}

/// First move for `player` after which the opponent has no winning move
pub fn find_blocking_move(board: &Board, player: Player) -> Option<Move> {
    let opponent = player.opponent();
    moves_for(board, player)
        .into_iter()
        .find(|(_, next)| !has_winning_move(next, opponent))
        .map(|(mv, _)| mv)
}
