//! Match session
//!
//! A [`Match`] owns the current board, the board before the last move (the
//! only history kept), the side to move and the outcome. White moves first.

use super::ai::AiPlayer;
use super::error::{GameError, GameResult};
use chessball_engine::api::{do_move, game_state, new_game, GameState};
use chessball_engine::forced_win::is_win_avoidable_by_opponent;
use chessball_engine::move_gen::legal_moves;
use chessball_engine::terminal::has_winning_move;
use chessball_engine::{Board, Move, Player, Variant};
use tracing::info;

#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    previous: Option<Board>,
    to_move: Player,
    state: GameState,
    last_move: Option<Move>,
    plies: u32,
}

impl Match {
    /// New match from the variant's starting position
    pub fn new(variant: Variant) -> Self {
        Self::from_position(new_game(variant), Player::White)
    }

    /// Match continuing from an arbitrary position
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let state = game_state(&board);
        Self {
            board,
            previous: None,
            to_move,
            state,
            last_move: None,
            plies: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board before the last move
    pub fn previous(&self) -> Option<&Board> {
        self.previous.as_ref()
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Moves played since the match was created
    pub fn plies(&self) -> u32 {
        self.plies
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, self.to_move)
    }

    /// Play `mv` for the side to move
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] once a side has won, and the engine's
    /// `IllegalMove` when `mv` is not legal here.
    pub fn play(&mut self, mv: Move) -> GameResult<GameState> {
        if let GameState::Won(winner) = self.state {
            return Err(GameError::GameOver { winner });
        }
        let next = do_move(&self.board, self.to_move, &mv)?;

        info!("[MATCH] {} plays {}", self.to_move, mv);
        self.previous = Some(std::mem::replace(&mut self.board, next));
        self.last_move = Some(mv);
        self.plies += 1;
        self.state = game_state(&self.board);

        match self.state {
            GameState::Won(winner) => info!("[MATCH] {} wins after {} plies", winner, self.plies),
            GameState::Playing => self.to_move = self.to_move.opponent(),
        }
        Ok(self.state)
    }

    /// Let `ai` choose and play the next move
    pub fn play_ai(&mut self, ai: &mut AiPlayer) -> GameResult<Move> {
        if let GameState::Won(winner) = self.state {
            return Err(GameError::GameOver { winner });
        }
        let ai_move = ai.compute_move(&self.board, self.to_move)?;
        self.play(ai_move.mv)?;
        Ok(ai_move.mv)
    }

    /// Whether the side to move can win now with no way for the opponent to
    /// have stopped it. `None` when there is no immediate win.
    pub fn pending_win_is_forced(&self) -> Option<bool> {
        if self.state != GameState::Playing || !has_winning_move(&self.board, self.to_move) {
            return None;
        }
        Some(!is_win_avoidable_by_opponent(&self.board, self.to_move))
    }

    /// After a win, whether the winner's final push was forced: classifies
    /// the position just before the winning move. `None` while playing or
    /// when no previous position is known.
    pub fn last_win_was_forced(&self) -> Option<bool> {
        let GameState::Won(winner) = self.state else {
            return None;
        };
        let before = self.previous.as_ref()?;
        Some(!is_win_avoidable_by_opponent(before, winner))
    }
}
