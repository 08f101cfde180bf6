//! Search and evaluation tests

mod common;

use chessball_engine::evaluation::{evaluate, feature_vector, EvalWeights, Feature};
use chessball_engine::search::{choose_best_move, search, SearchOptions};
use chessball_engine::terminal::winning_moves;
use chessball_engine::{Cell, Move, Piece, Player, RuleSet};
use common::{parse, sample_boards};

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_root_win_is_always_taken() {
    //! Whenever the root player can win, the search returns a winning move
    //! scored +∞ regardless of depth

    let mut checked = 0;
    for board in sample_boards() {
        for player in Player::ALL {
            let wins = winning_moves(&board, player);
            if wins.is_empty() {
                continue;
            }
            checked += 1;
            for depth in [1, 3] {
                let (mv, after, score) = choose_best_move(&board, player, depth, None);
                assert_eq!(score, f64::INFINITY);
                let mv = mv.expect("winning move");
                assert!(wins.contains(&mv));
                let after = after.expect("board after win");
                assert_eq!(after.find_ball().map(|c| c.row), Some(after.goal_row(player)));
            }
        }
    }
    assert!(checked > 0, "sample should contain winnable positions");
}

#[test]
fn test_search_always_moves_when_moves_exist() {
    for board in sample_boards().into_iter().step_by(7) {
        for player in Player::ALL {
            let has_moves = !chessball_engine::move_gen::moves_for(&board, player).is_empty();
            let (mv, after, _) = choose_best_move(&board, player, 2, None);
            assert_eq!(mv.is_some(), has_moves);
            assert_eq!(after.is_some(), has_moves);
        }
    }
}

#[test]
fn test_pruning_agrees_with_plain_minimax() {
    let weights = EvalWeights::default();
    for board in sample_boards().into_iter().step_by(11) {
        for player in Player::ALL {
            let pruned = search(&board, player, &weights, &SearchOptions::with_depth(2));
            let plain = search(
                &board,
                player,
                &weights,
                &SearchOptions::with_depth(2).alpha_beta(false),
            );
            assert_eq!(pruned.best_move, plain.best_move, "\n{board}");
            assert_eq!(pruned.score, plain.score, "\n{board}");
        }
    }
}

#[test]
fn test_search_scores_a_created_threat_as_won() {
    //! White cannot win at once, but stepping next to the ball creates an
    //! immediate threat; the reply node short-circuits to +∞ for White

    let board = parse(
        "\
-- -- -- -- --
-- WA -- -- --
-- -- -- -- --
-- -- NB -- --
BD -- -- -- --
",
        RuleSet::new(5, 5, false, false).unwrap(),
    );
    assert!(winning_moves(&board, Player::White).is_empty());
    let (mv, after, score) = choose_best_move(&board, Player::White, 2, None);
    assert_eq!(score, f64::INFINITY);
    assert_eq!(
        mv,
        Some(Move::Simple {
            from: Cell::new(1, 1),
            to: Cell::new(2, 1),
        })
    );
    assert!(!winning_moves(&after.unwrap(), Player::White).is_empty());
}

// ============================================================================
// Evaluation
// ============================================================================

#[test]
fn test_adding_a_pusher_raises_the_score() {
    //! Moving a friendly piece next to the ball, on the side it can push
    //! from, raises adj_pushers and the total score

    let far = parse(
        "\
WD -- -- -- -- --
-- -- -- -- -- --
-- -- -- -- -- --
-- -- NB -- -- --
-- -- -- -- -- --
-- -- -- -- -- --
-- -- -- -- -- BA
",
        RuleSet::extended(),
    );
    let mut near = far.clone();
    near.remove(Cell::new(0, 0)).unwrap();
    near.place(Cell::new(2, 2), Piece::Defender(Player::White))
        .unwrap();

    let weights = EvalWeights::default();
    let before = feature_vector(&far, Player::White);
    let after = feature_vector(&near, Player::White);
    assert!(after[Feature::AdjPushers] > before[Feature::AdjPushers]);
    assert!(evaluate(&near, Player::White, &weights) > evaluate(&far, Player::White, &weights));
}

#[test]
fn test_evaluation_is_bias_plus_weighted_sum() {
    let board = chessball_engine::api::new_game(chessball_engine::Variant::Extended);
    let weights = EvalWeights::with_overrides([(Feature::Mobility, 2.0), (Feature::Control, 0.0)])
        .with_bias(7.5);
    let fv = feature_vector(&board, Player::Black);
    let expected = 7.5
        + Feature::ALL
            .iter()
            .map(|&f| weights.weight(f) * fv[f])
            .sum::<f64>();
    assert!((evaluate(&board, Player::Black, &weights) - expected).abs() < 1e-9);
}

#[test]
fn test_immediate_win_dominates_evaluation() {
    let board = parse(
        "\
-- -- -- -- --
-- -- WA -- --
-- -- NB -- --
-- -- -- -- --
",
        common::small_rules(),
    );
    let weights = EvalWeights::default();
    assert!(evaluate(&board, Player::White, &weights) > 1e5);
    assert!(evaluate(&board, Player::Black, &weights) < -1e5);
}
