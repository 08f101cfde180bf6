//! # ChessBall Engine
//!
//! Rules, retrograde analysis and move search for ChessBall, a two-player grid
//! game in which attackers and defenders manoeuvre a neutral ball onto their
//! goal row.
//!
//! ## Layers
//!
//! | Module        | Role                                                        |
//! |---------------|-------------------------------------------------------------|
//! | [`types`]     | players, pieces, cells, directions, move records            |
//! | [`rules`]     | grid size and optional move kinds per variant               |
//! | [`board`]     | grid state and lookups                                      |
//! | [`notation`]  | `WA`/`NB`/`--` text format                                  |
//! | [`move_gen`]  | forward moves and their exact retrograde counterparts       |
//! | [`terminal`]  | winning moves and one-ply blocking                          |
//! | [`forced_win`]| was the opponent able to stop this win?                     |
//! | [`evaluation`]| feature extraction and weighted scoring                     |
//! | [`search`]    | minimax with alpha-beta pruning                             |
//! | [`api`]       | new game, legality-checked moves, game state, AI reply      |
//!
//! ## Example
//!
//! ```rust
//! use chessball_engine::api::new_game;
//! use chessball_engine::rules::Variant;
//! use chessball_engine::search::choose_best_move;
//! use chessball_engine::types::Player;
//!
//! let board = new_game(Variant::Classic);
//! let (mv, after, _score) = choose_best_move(&board, Player::White, 1, None);
//! assert!(mv.is_some() && after.is_some());
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod forced_win;
pub mod move_gen;
pub mod notation;
pub mod rules;
pub mod search;
pub mod terminal;
pub mod types;

pub use board::Board;
pub use error::{ChessBallError, ChessBallResult};
pub use rules::{RuleSet, Variant};
pub use types::{Cell, Move, MoveKind, Piece, PieceKind, Player};
