//! Game state queries and AI move generation

use crate::board::Board;
use crate::evaluation::EvalWeights;
use crate::search::{search, SearchOptions, SearchOutcome};
use crate::terminal::ball_on_goal;
use crate::types::Player;

/// Outcome of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won(Player),
}

/// Current game state, read off the ball's row
pub fn game_state(board: &Board) -> GameState {
    Player::ALL
        .into_iter()
        .find(|&p| ball_on_goal(board, p))
        .map_or(GameState::Playing, GameState::Won)
}

/// Get the AI's response to the current position
pub fn reply(
    board: &Board,
    player: Player,
    weights: &EvalWeights,
    options: &SearchOptions,
) -> SearchOutcome {
    search(board, player, weights, options)
}
