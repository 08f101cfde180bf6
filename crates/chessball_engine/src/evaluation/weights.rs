//! Evaluation weights
//!
//! [`EvalWeights`] stores only the overrides a caller supplied; every other
//! feature uses its default from [`Feature::default_weight`].

use super::features::Feature;
use std::collections::BTreeMap;

impl Feature {
    /// Weight used when no override is given
    pub fn default_weight(self) -> f64 {
        match self {
            Feature::WinNow => 1e6,
            Feature::LoseNow => -1e6,
            Feature::BallRow => 12.0,
            Feature::BallInForbiddenCol => -5.0,
            Feature::AdjPushers => 30.0,
            Feature::OppAdjPushers => -30.0,
            Feature::Control => 20.0,
            Feature::Mobility => 1.0,
            Feature::PushDistance => 20.0,
            Feature::UnavoidableWin => 200.0,
            Feature::Vulnerable => -15.0,
            Feature::OppBetweenBallAndGoal => -8.0,
        }
    }
}

/// Feature weights plus a constant bias
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvalWeights {
    overrides: BTreeMap<Feature, f64>,
    bias: f64,
}

impl EvalWeights {
    /// Default weights with the given overrides applied
    pub fn with_overrides(overrides: impl IntoIterator<Item = (Feature, f64)>) -> Self {
        Self {
            overrides: overrides.into_iter().collect(),
            bias: 0.0,
        }
    }

    pub fn with_bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    pub fn set(&mut self, feature: Feature, weight: f64) {
        self.overrides.insert(feature, weight);
    }

    /// Effective weight of `feature`
    #[inline]
    pub fn weight(&self, feature: Feature) -> f64 {
        self.overrides
            .get(&feature)
            .copied()
            .unwrap_or_else(|| feature.default_weight())
    }

    #[inline]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn overrides(&self) -> &BTreeMap<Feature, f64> {
        &self.overrides
    }
}
