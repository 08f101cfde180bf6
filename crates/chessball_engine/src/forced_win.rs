//! One-ply retrograde forced-win classifier
//!
//! Given a position where `player` is to move and can win immediately, decide
//! whether the opponent could have prevented it on their previous move. Every
//! way the opponent could have reached this position is reconstructed with
//! [`previous_moves_for`]; the win was avoidable only if each of those
//! predecessors offered the opponent a blocking move.

use crate::board::Board;
use crate::move_gen::previous_moves_for;
use crate::terminal::find_blocking_move;
use crate::types::Player;

/// `true` when every reconstructed predecessor gave the opponent a block.
///
/// Returns `false` when some predecessor left no block (the win was forced)
/// and when no predecessor exists at all: a position with no history cannot
/// be credited to an opponent mistake.
pub fn is_win_avoidable_by_opponent(board: &Board, player: Player) -> bool {
    let opponent = player.opponent();
    let predecessors = previous_moves_for(board, opponent);
    if predecessors.is_empty() {
        return false;
    }
    predecessors
        .iter()
        .all(|(_, prev)| find_blocking_move(prev, opponent).is_some())
}
