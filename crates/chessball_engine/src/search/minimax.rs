//! Minimax with optional alpha-beta pruning
//!
//! Scores are always from the root player's point of view: the root is a
//! maximizing node and polarity flips with every ply. Each node runs, in
//! order:
//!
//! 1. side to move can win now: ±∞ and the winning move
//! 2. other side can win now: ∓∞, no move
//! 3. depth exhausted or no legal move: static evaluation
//! 4. expand children in generation order, first strict extremum wins ties
//!
//! When the root ends up without a move although moves exist (every child
//! scored −∞, or the opponent's threat short-circuited the root) the children
//! are compared one ply deep with the static evaluator instead.

use super::limits::{Deadline, SearchOptions};
use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::evaluation::{evaluate, EvalWeights};
use crate::move_gen::moves_for;
use crate::terminal::{first_winning_move, has_winning_move};
use crate::types::{Move, Player};

/// Counters collected during one search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Sibling lists abandoned on an alpha-beta cutoff
    pub cutoffs: u64,
    /// Static evaluations performed
    pub evaluations: u64,
    /// `false` when the time budget stopped the search early
    pub completed: bool,
}

/// Result of a search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub best_move: Option<Move>,
    /// Board after `best_move`
    pub board: Option<Board>,
    pub score: f64,
    pub stats: SearchStats,
}

struct NodeResult {
    score: f64,
    best: Option<(Move, Board)>,
}

impl NodeResult {
    fn leaf(score: f64) -> Self {
        Self { score, best: None }
    }
}

struct Searcher<'a> {
    root: Player,
    weights: &'a EvalWeights,
    alpha_beta: bool,
    deadline: Deadline,
    stats: SearchStats,
}

impl Searcher<'_> {
    fn evaluate(&mut self, board: &Board) -> f64 {
        self.stats.evaluations += 1;
        evaluate(board, self.root, self.weights)
    }

    fn minimax(
        &mut self,
        board: &Board,
        to_move: Player,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> NodeResult {
        self.stats.nodes += 1;

        if let Some(win) = first_winning_move(board, to_move) {
            let score = if maximizing { SCORE_INF } else { -SCORE_INF };
            return NodeResult {
                score,
                best: Some(win),
            };
        }
        if has_winning_move(board, to_move.opponent()) {
            let score = if maximizing { -SCORE_INF } else { SCORE_INF };
            return NodeResult::leaf(score);
        }

        let children = if depth == 0 {
            Vec::new()
        } else {
            moves_for(board, to_move)
        };
        if children.is_empty() {
            return NodeResult::leaf(self.evaluate(board));
        }

        let mut value = if maximizing { -SCORE_INF } else { SCORE_INF };
        let mut best = None;

        for (i, (mv, child)) in children.into_iter().enumerate() {
            if i > 0 && self.deadline.expired() {
                self.stats.completed = false;
                break;
            }

            let score = self
                .minimax(&child, to_move.opponent(), depth - 1, alpha, beta, !maximizing)
                .score;

            if maximizing {
                if score > value {
                    value = score;
                    best = Some((mv, child));
                }
                alpha = alpha.max(value);
            } else {
                if score < value {
                    value = score;
                    best = Some((mv, child));
                }
                beta = beta.min(value);
            }

            if self.alpha_beta && alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        NodeResult { score: value, best }
    }

    /// Best child by static evaluation, first maximum wins
    fn one_ply_fallback(&mut self, board: &Board) -> Option<NodeResult> {
        let mut best: Option<NodeResult> = None;
        for (mv, child) in moves_for(board, self.root) {
            let score = self.evaluate(&child);
            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(NodeResult {
                    score,
                    best: Some((mv, child)),
                });
            }
        }
        best
    }
}

/// Search `board` for `player` under `options`
pub fn search(
    board: &Board,
    player: Player,
    weights: &EvalWeights,
    options: &SearchOptions,
) -> SearchOutcome {
    let mut searcher = Searcher {
        root: player,
        weights,
        alpha_beta: options.alpha_beta,
        deadline: Deadline::start(options.time_budget),
        stats: SearchStats {
            completed: true,
            ..SearchStats::default()
        },
    };

    let mut result = searcher.minimax(board, player, options.depth, -SCORE_INF, SCORE_INF, true);
    if result.best.is_none() {
        if let Some(fallback) = searcher.one_ply_fallback(board) {
            result = fallback;
        }
    }

    let (best_move, board_after) = match result.best {
        Some((mv, b)) => (Some(mv), Some(b)),
        None => (None, None),
    };
    SearchOutcome {
        best_move,
        board: board_after,
        score: result.score,
        stats: searcher.stats,
    }
}

/// Choose a move for `player` with a fixed-depth alpha-beta search.
///
/// `weights` defaults to [`EvalWeights::default`]. Returns the move, the board
/// it produces and its score; `(None, None, score)` only when `player` has no
/// legal move at all.
pub fn choose_best_move(
    board: &Board,
    player: Player,
    depth: u32,
    weights: Option<&EvalWeights>,
) -> (Option<Move>, Option<Board>, f64) {
    let defaults = EvalWeights::default();
    let weights = weights.unwrap_or(&defaults);
    let outcome = search(board, player, weights, &SearchOptions::with_depth(depth));
    (outcome.best_move, outcome.board, outcome.score)
}
