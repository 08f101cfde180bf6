//! AI statistics for display and debugging

use super::player::AiMove;
use std::time::Duration;

/// What the AI reported about its most recent move
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AiStatistics {
    pub last_score: f64,
    pub last_depth: u32,
    pub last_nodes: u64,
    pub last_cutoffs: u64,
    pub thinking_time: Duration,
    /// Moves computed since the player was created
    pub moves_played: u32,
}

impl AiStatistics {
    pub(crate) fn record(&mut self, ai_move: &AiMove) {
        self.last_score = ai_move.score;
        self.last_depth = ai_move.depth;
        self.last_nodes = ai_move.nodes_searched;
        self.last_cutoffs = ai_move.cutoffs;
        self.thinking_time = ai_move.thinking_time;
        self.moves_played += 1;
    }
}
