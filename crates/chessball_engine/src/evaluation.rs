//! Heuristic position evaluation
//!
//! Scores a position from one side's point of view as a weighted sum of
//! normalised features plus a bias:
//!
//! ```text
//! score = bias + Σ weight(f) · value(f)
//! ```
//!
//! ## Module Organization
//!
//! - `features` - the [`Feature`] catalogue and [`feature_vector`] extraction
//! - `weights` - [`EvalWeights`], default weights and overrides

mod features;
mod weights;

pub use features::{feature_vector, Feature, FeatureVector};
pub use weights::EvalWeights;

use crate::board::Board;
use crate::types::Player;

/// Static evaluation of `board` for `player`
pub fn evaluate(board: &Board, player: Player, weights: &EvalWeights) -> f64 {
    let features = feature_vector(board, player);
    features
        .iter()
        .fold(weights.bias(), |acc, (feature, value)| {
            acc + weights.weight(feature) * value
        })
}
