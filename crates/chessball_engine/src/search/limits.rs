//! Search limits
//!
//! Depth is always honoured. The optional time budget is checked between
//! sibling expansions, so an expired search still finishes the branch it is
//! in and reports the best move found so far.

use instant::Instant;
use std::time::Duration;

/// Default search depth in plies
pub const DEFAULT_DEPTH: u32 = 2;

/// Search configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Plies to look ahead; 0 evaluates the root's children statically
    pub depth: u32,
    /// Prune with alpha-beta bounds
    pub alpha_beta: bool,
    /// Wall-clock budget for the whole search
    pub time_budget: Option<Duration>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            alpha_beta: true,
            time_budget: None,
        }
    }
}

impl SearchOptions {
    pub fn with_depth(depth: u32) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    pub fn alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }

    pub fn time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }
}

/// Point in time after which no further siblings are expanded
#[derive(Debug, Clone, Copy)]
pub(crate) struct Deadline(Option<Instant>);

impl Deadline {
    pub(crate) fn start(budget: Option<Duration>) -> Self {
        Self(budget.map(|b| Instant::now() + b))
    }

    #[inline]
    pub(crate) fn expired(&self) -> bool {
        self.0.is_some_and(|at| Instant::now() >= at)
    }
}
