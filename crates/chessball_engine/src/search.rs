//! Best-move search
//!
//! This module implements the engine's move choice using:
//! - Minimax over the side to move, scored from the root player's view
//! - Alpha-beta pruning (switchable, results are identical either way)
//! - Immediate-win short-circuits at every node
//! - An optional wall-clock budget with best-so-far results
//!
//! ## Module Organization
//!
//! - `limits` - [`SearchOptions`] and the deadline check
//! - `minimax` - the recursive search, statistics and root fallback

mod limits;
mod minimax;

pub use limits::SearchOptions;
pub use minimax::{choose_best_move, search, SearchOutcome, SearchStats};
