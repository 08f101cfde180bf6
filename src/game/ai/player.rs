//! AI move computation
//!
//! Runs [`chessball_engine::api::reply`] synchronously and packages the result
//! with the statistics the engine collected.

use super::statistics::AiStatistics;
use crate::core::EngineSettings;
use crate::game::error::{GameError, GameResult};
use chessball_engine::api::reply;
use chessball_engine::{Board, Move, Player};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// A move chosen by the AI together with how it was found
#[derive(Debug, Clone)]
pub struct AiMove {
    pub mv: Move,
    /// Board after `mv`
    pub board: Board,
    /// Score from the mover's point of view, ±∞ for decided positions
    pub score: f64,
    pub depth: u32,
    pub nodes_searched: u64,
    pub cutoffs: u64,
    /// `false` when the time budget cut the search short
    pub completed: bool,
    pub thinking_time: Duration,
}

/// Engine-backed player
#[derive(Debug, Clone, Default)]
pub struct AiPlayer {
    settings: EngineSettings,
    stats: AiStatistics,
}

impl AiPlayer {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings,
            stats: AiStatistics::default(),
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut EngineSettings {
        &mut self.settings
    }

    pub fn statistics(&self) -> &AiStatistics {
        &self.stats
    }

    /// Pick a move for `player` on `board`
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoLegalMove`] when `player` cannot move.
    pub fn compute_move(&mut self, board: &Board, player: Player) -> GameResult<AiMove> {
        let options = self.settings.search_options();

        info!("[AI] ========== AI SEARCH STARTED ==========");
        info!(
            "[AI] Player: {} | Depth: {} | Alpha-beta: {} | Budget: {:?}",
            player, options.depth, options.alpha_beta, options.time_budget
        );
        debug!("[AI] Position:\n{}", board);

        let start = Instant::now();
        let outcome = reply(board, player, &self.settings.weights, &options);
        let elapsed = start.elapsed();

        let (Some(mv), Some(after)) = (outcome.best_move, outcome.board) else {
            warn!("[AI] {} has no legal move", player);
            return Err(GameError::NoLegalMove { player });
        };

        info!("[AI] ========== AI SEARCH COMPLETE ==========");
        info!("[AI] Best Move: {}", mv);
        info!(
            "[AI] Evaluation: Score={} | Depth={} | Nodes={} | Cutoffs={} | Time={:.3}s",
            outcome.score,
            options.depth,
            outcome.stats.nodes,
            outcome.stats.cutoffs,
            elapsed.as_secs_f32()
        );
        if !outcome.stats.completed {
            warn!("[AI] Time budget exhausted, playing best move found so far");
        }

        let ai_move = AiMove {
            mv,
            board: after,
            score: outcome.score,
            depth: options.depth,
            nodes_searched: outcome.stats.nodes,
            cutoffs: outcome.stats.cutoffs,
            completed: outcome.stats.completed,
            thinking_time: elapsed,
        };
        self.stats.record(&ai_move);
        Ok(ai_move)
    }
}
