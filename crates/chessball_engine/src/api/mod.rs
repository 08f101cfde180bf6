//! Public API for the ChessBall engine
//!
//! Provides high-level functions for game management and AI move generation.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, starting positions)
//! - `moves` - Move execution and validation (do_move, is_legal_move)
//! - `state` - Game state queries and AI (game_state, reply)

mod game;
mod moves;
mod state;

pub use game::{new_game, starting_position};
pub use moves::{do_move, is_legal_move};
pub use state::{game_state, reply, GameState};
