//! Feature extraction
//!
//! | Feature                     | Range   | Meaning                                               |
//! |-----------------------------|---------|-------------------------------------------------------|
//! | `win_now`                   | {0, 1}  | side can put the ball on its goal row this move       |
//! | `lose_now`                  | {0, 1}  | opponent could do the same                            |
//! | `ball_row`                  | [0, 1]  | 1 when the ball sits on the side's goal row           |
//! | `ball_in_forbidden_col`     | {0, 1}  | ball rests in an edge column                          |
//! | `adj_pushers`               | [0, 1]  | legal push directions for the side, / 8               |
//! | `opp_adj_pushers`           | [0, 1]  | same for the opponent                                 |
//! | `control`                   | [-1, 1] | (friendly − enemy pieces around the ball) / 8         |
//! | `mobility`                  | [-1, 1] | (own − opponent move count) / 60, clamped             |
//! | `push_distance`             | [0, 1]  | rows to goal, with a half-row bonus when push-ready   |
//! | `unavoidable_win`           | {0, 1}  | `win_now` and the opponent could not have prevented it |
//! | `vulnerable`                | [0, 1]  | share of own pieces open to an immediate tackle       |
//! | `opp_between_ball_and_goal` | [0, 1]  | share of opponent pieces between ball and goal row    |
//!
//! Ball-dependent features are 0 on a board without a ball.

use crate::board::Board;
use crate::constants::{DIRECTIONS, MOBILITY_SCALE, NEIGHBOUR_SCALE, PUSH_READY_BONUS};
use crate::forced_win::is_win_avoidable_by_opponent;
use crate::move_gen::{move_count, push_along, tackle_along};
use crate::terminal::has_winning_move;
use crate::types::{Cell, Direction, Piece, Player};
use std::fmt;

/// Named evaluation feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Feature {
    WinNow,
    LoseNow,
    BallRow,
    BallInForbiddenCol,
    AdjPushers,
    OppAdjPushers,
    Control,
    Mobility,
    PushDistance,
    UnavoidableWin,
    Vulnerable,
    OppBetweenBallAndGoal,
}

impl Feature {
    pub const COUNT: usize = 12;

    pub const ALL: [Feature; Feature::COUNT] = [
        Feature::WinNow,
        Feature::LoseNow,
        Feature::BallRow,
        Feature::BallInForbiddenCol,
        Feature::AdjPushers,
        Feature::OppAdjPushers,
        Feature::Control,
        Feature::Mobility,
        Feature::PushDistance,
        Feature::UnavoidableWin,
        Feature::Vulnerable,
        Feature::OppBetweenBallAndGoal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Feature::WinNow => "win_now",
            Feature::LoseNow => "lose_now",
            Feature::BallRow => "ball_row",
            Feature::BallInForbiddenCol => "ball_in_forbidden_col",
            Feature::AdjPushers => "adj_pushers",
            Feature::OppAdjPushers => "opp_adj_pushers",
            Feature::Control => "control",
            Feature::Mobility => "mobility",
            Feature::PushDistance => "push_distance",
            Feature::UnavoidableWin => "unavoidable_win",
            Feature::Vulnerable => "vulnerable",
            Feature::OppBetweenBallAndGoal => "opp_between_ball_and_goal",
        }
    }

    pub fn from_name(name: &str) -> Option<Feature> {
        Feature::ALL.into_iter().find(|f| f.name() == name)
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Feature values for one position and side
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeatureVector {
    values: [f64; Feature::COUNT],
}

impl FeatureVector {
    #[inline]
    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }

    #[inline]
    fn set(&mut self, feature: Feature, value: f64) {
        self.values[feature.index()] = value;
    }

    /// `(feature, value)` pairs in catalogue order
    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL.into_iter().map(|f| (f, self.get(f)))
    }
}

impl std::ops::Index<Feature> for FeatureVector {
    type Output = f64;

    fn index(&self, feature: Feature) -> &f64 {
        &self.values[feature.index()]
    }
}

fn flag(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

/// Extract every feature of `board` from `player`'s point of view
pub fn feature_vector(board: &Board, player: Player) -> FeatureVector {
    let opponent = player.opponent();
    let mut fv = FeatureVector::default();

    let win_now = has_winning_move(board, player);
    fv.set(Feature::WinNow, flag(win_now));
    fv.set(Feature::LoseNow, flag(has_winning_move(board, opponent)));

    let own_moves = move_count(board, player) as f64;
    let opp_moves = move_count(board, opponent) as f64;
    fv.set(
        Feature::Mobility,
        ((own_moves - opp_moves) / MOBILITY_SCALE).clamp(-1.0, 1.0),
    );

    if win_now && !is_win_avoidable_by_opponent(board, player) {
        fv.set(Feature::UnavoidableWin, 1.0);
    }
    fv.set(Feature::Vulnerable, vulnerable_share(board, player));

    let Some(ball) = board.find_ball() else {
        return fv;
    };

    let span = (board.rows() - 1) as f64;
    let dist = ball.row.abs_diff(board.goal_row(player)) as f64;
    fv.set(Feature::BallRow, 1.0 - dist / span);
    fv.set(
        Feature::BallInForbiddenCol,
        flag(board.is_forbidden_col(ball.col)),
    );
    fv.set(
        Feature::AdjPushers,
        pusher_count(board, ball, player) as f64 / NEIGHBOUR_SCALE,
    );
    fv.set(
        Feature::OppAdjPushers,
        pusher_count(board, ball, opponent) as f64 / NEIGHBOUR_SCALE,
    );
    fv.set(Feature::Control, control(board, ball, player));
    fv.set(Feature::PushDistance, push_distance(board, ball, player));
    fv.set(
        Feature::OppBetweenBallAndGoal,
        opponents_between(board, ball, player),
    );

    fv
}

/// Directions in which one of `player`'s pieces can legally push the ball
fn pusher_count(board: &Board, ball: Cell, player: Player) -> usize {
    DIRECTIONS
        .iter()
        .filter(|&&dir| {
            board
                .step(ball, dir, -1)
                .filter(|&from| board.piece_at(from).is_some_and(|p| p.belongs_to(player)))
                .and_then(|from| push_along(board, from, dir))
                .is_some()
        })
        .count()
}

fn control(board: &Board, ball: Cell, player: Player) -> f64 {
    let mut balance = 0i32;
    for &dir in &DIRECTIONS {
        match board.step(ball, dir, 1).and_then(|c| board.piece_at(c)) {
            Some(p) if p.belongs_to(player) => balance += 1,
            Some(p) if p.belongs_to(player.opponent()) => balance -= 1,
            _ => {}
        }
    }
    f64::from(balance) / NEIGHBOUR_SCALE
}

fn push_distance(board: &Board, ball: Cell, player: Player) -> f64 {
    let span = (board.rows() - 1) as f64;
    let dist = ball.row.abs_diff(board.goal_row(player)) as f64;
    let forward = match player {
        Player::White => Direction::new(1, 0),
        Player::Black => Direction::new(-1, 0),
    };
    let push_ready = board
        .step(ball, forward, -1)
        .filter(|&behind| board.piece_at(behind).is_some_and(|p| p.belongs_to(player)))
        .and_then(|behind| push_along(board, behind, forward))
        .is_some();
    let bonus = if push_ready { PUSH_READY_BONUS } else { 0.0 };
    1.0 - (dist - bonus).max(0.0) / span
}

/// Share of `player`'s pieces an opposing defender could tackle right now
fn vulnerable_share(board: &Board, player: Player) -> f64 {
    if !board.rules().tackles() {
        return 0.0;
    }
    let opponent = player.opponent();
    let mut total = 0usize;
    let mut exposed = 0usize;
    for (cell, _) in board.pieces_of(player) {
        total += 1;
        let tackled = DIRECTIONS.iter().any(|&dir| {
            board
                .step(cell, dir, 1)
                .filter(|&d| board.piece_at(d) == Some(Piece::Defender(opponent)))
                .and_then(|d| tackle_along(board, d, dir.reversed(), opponent))
                .is_some()
        });
        if tackled {
            exposed += 1;
        }
    }
    if total == 0 {
        0.0
    } else {
        exposed as f64 / total as f64
    }
}

/// Share of opponent pieces on rows strictly between the ball and `player`'s goal
fn opponents_between(board: &Board, ball: Cell, player: Player) -> f64 {
    let goal = board.goal_row(player);
    let (lo, hi) = (ball.row.min(goal), ball.row.max(goal));
    let opponent = player.opponent();
    let mut total = 0usize;
    let mut between = 0usize;
    for (cell, _) in board.pieces_of(opponent) {
        total += 1;
        if cell.row > lo && cell.row < hi {
            between += 1;
        }
    }
    if total == 0 {
        0.0
    } else {
        between as f64 / total as f64
    }
}
