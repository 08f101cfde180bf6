//! # ChessBall Engine Constants
//!
//! ## Direction Order
//!
//! Every generator walks the eight neighbour directions in one fixed order:
//!
//! | Index | Name | (dr, dc)  |
//! |-------|------|-----------|
//! | 0     | N    | (-1, 0)   |
//! | 1     | S    | (+1, 0)   |
//! | 2     | W    | (0, -1)   |
//! | 3     | E    | (0, +1)   |
//! | 4     | NW   | (-1, -1)  |
//! | 5     | NE   | (-1, +1)  |
//! | 6     | SW   | (+1, -1)  |
//! | 7     | SE   | (+1, +1)  |
//!
//! The order is observable: search breaks ties by enumeration order, and
//! [`crate::terminal::find_blocking_move`] returns the first block it meets.
//!
//! ## Scores
//!
//! Search scores are `f64`. A decided position scores `±SCORE_INF`
//! (`f64::INFINITY`) so no heuristic sum can ever reach it.
//!
//! ## Feature Normalisation
//!
//! Raw feature counts are divided by fixed scales so that every feature lands
//! roughly in `[-1, 1]` before weighting.

use crate::types::Direction;

pub const N: Direction = Direction::new(-1, 0);
pub const S: Direction = Direction::new(1, 0);
pub const W: Direction = Direction::new(0, -1);
pub const E: Direction = Direction::new(0, 1);
pub const NW: Direction = Direction::new(-1, -1);
pub const NE: Direction = Direction::new(-1, 1);
pub const SW: Direction = Direction::new(1, -1);
pub const SE: Direction = Direction::new(1, 1);

/// All eight directions in generation order
pub const DIRECTIONS: [Direction; 8] = [N, S, W, E, NW, NE, SW, SE];

/// Score of a decided position
pub const SCORE_INF: f64 = f64::INFINITY;

/// Number of neighbour directions, the scale for pusher and control counts
pub const NEIGHBOUR_SCALE: f64 = 8.0;

/// Move-count difference mapped to a mobility of ±1
pub const MOBILITY_SCALE: f64 = 60.0;

/// Bonus (in rows) granted to `push_distance` when a friendly piece stands
/// ready to push the ball straight toward the goal
pub const PUSH_READY_BONUS: f64 = 0.5;
