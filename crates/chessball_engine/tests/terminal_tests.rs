//! Win detection and forced-win classification tests

mod common;

use chessball_engine::forced_win::is_win_avoidable_by_opponent;
use chessball_engine::move_gen::{moves_for, previous_moves_for};
use chessball_engine::terminal::{find_blocking_move, first_winning_move, winning_moves};
use chessball_engine::Player;
use common::{parse, sample_boards, small_rules};

// ============================================================================
// Win detection
// ============================================================================

#[test]
fn test_winning_moves_match_ball_on_goal_row() {
    //! winning_moves is exactly the subset of moves_for landing the ball on
    //! the mover's goal row

    for board in sample_boards() {
        for player in Player::ALL {
            let expected: Vec<_> = moves_for(&board, player)
                .into_iter()
                .filter(|(_, next)| {
                    next.find_ball()
                        .is_some_and(|b| b.row == next.goal_row(player))
                })
                .map(|(mv, _)| mv)
                .collect();
            assert_eq!(winning_moves(&board, player), expected);
            assert_eq!(
                first_winning_move(&board, player).map(|(mv, _)| mv),
                expected.first().copied()
            );
        }
    }
}

#[test]
fn test_blocking_move_leaves_opponent_without_a_win() {
    for board in sample_boards() {
        for player in Player::ALL {
            if let Some(block) = find_blocking_move(&board, player) {
                let next = block.apply(&board).unwrap();
                assert!(winning_moves(&next, player.opponent()).is_empty());
            }
        }
    }
}

// ============================================================================
// Forced-win classification
// ============================================================================
//
// All positions use a 4×5 board without jumps or tackles. White's attacker
// on (1,2) pushes the ball from (2,2) to the goal cell (3,2); Black can only
// stop that by standing on (3,2).

#[test]
fn test_win_is_forced_when_the_only_history_leaves_no_block() {
    //! Black's defender on (3,1) is boxed in by White pieces, so it can only
    //! have come from the goal cell (3,2) and must have stepped off it

    let board = parse(
        "\
-- -- -- -- --
-- -- WA -- --
WD WD NB -- --
WD BD -- -- --
",
        small_rules(),
    );
    assert!(!winning_moves(&board, Player::White).is_empty());

    let history = previous_moves_for(&board, Player::Black);
    assert_eq!(history.len(), 1);
    assert_eq!(find_blocking_move(&history[0].1, Player::Black), None);

    assert!(!is_win_avoidable_by_opponent(&board, Player::White));
}

#[test]
fn test_win_is_avoidable_when_every_history_offers_a_block() {
    //! A second Black piece lets Black keep the goal cell covered in the one
    //! history where the defender stood on it; in every other history the
    //! defender can step onto it

    let board = parse(
        "\
-- -- -- -- BD
-- -- WA -- --
WD WD NB -- --
WD BD -- -- --
",
        small_rules(),
    );
    assert!(!winning_moves(&board, Player::White).is_empty());

    let history = previous_moves_for(&board, Player::Black);
    assert_eq!(history.len(), 4);
    for (_, prev) in &history {
        assert!(find_blocking_move(prev, Player::Black).is_some(), "\n{prev}");
    }

    assert!(is_win_avoidable_by_opponent(&board, Player::White));
}

#[test]
fn test_no_history_is_not_avoidable() {
    let board = parse(
        "\
-- -- -- -- --
-- -- WA -- --
-- -- NB -- --
-- -- -- -- --
",
        small_rules(),
    );
    assert!(previous_moves_for(&board, Player::Black).is_empty());
    assert!(!is_win_avoidable_by_opponent(&board, Player::White));
}
