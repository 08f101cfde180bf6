//! Retrograde generation tests
//!
//! Forward and backward generation must be exact mirrors, and neither may
//! ever place a pushed ball in a forbidden column.

mod common;

use chessball_engine::move_gen::{moves_for, previous_moves_for};
use chessball_engine::{Cell, Move, MoveKind, Piece, Player, RuleSet};
use common::{parse, sample_boards};

// ============================================================================
// Mirror exactness
// ============================================================================

#[test]
fn test_every_forward_move_is_found_backwards() {
    //! For every (m, B) generated from A, previous_moves_for(B) holds (m, A)

    for board in sample_boards() {
        for player in Player::ALL {
            for (mv, next) in moves_for(&board, player) {
                let back = previous_moves_for(&next, player);
                assert!(
                    back.iter().any(|(m, prev)| *m == mv && *prev == board),
                    "{player} {mv} not reconstructed from\n{next}\noriginal\n{board}"
                );
            }
        }
    }
}

#[test]
fn test_every_backward_move_replays_forward() {
    //! For every (m, A) reconstructed from B, A really leads to B via m

    for board in sample_boards() {
        for player in Player::ALL {
            for (mv, prev) in previous_moves_for(&board, player) {
                assert_eq!(mv.apply(&prev).unwrap(), board, "{player} {mv}");
                let forward = moves_for(&prev, player);
                assert!(
                    forward.iter().any(|(m, b)| *m == mv && *b == board),
                    "{player} {mv} is not legal from\n{prev}"
                );
            }
        }
    }
}

#[test]
fn test_apply_and_revert_are_inverse() {
    for board in sample_boards() {
        for player in Player::ALL {
            for (mv, next) in moves_for(&board, player) {
                assert_eq!(mv.revert(&next).unwrap(), board);
            }
        }
    }
}

// ============================================================================
// Forbidden columns
// ============================================================================

#[test]
fn test_pushes_never_use_forbidden_columns() {
    for board in sample_boards() {
        for player in Player::ALL {
            let forward = moves_for(&board, player);
            let backward = previous_moves_for(&board, player);
            for (mv, _) in forward.iter().chain(backward.iter()) {
                if let Move::Push { to, ball_to, .. } = *mv {
                    assert!(!board.is_forbidden_col(ball_to.col), "{mv}");
                    assert!(!board.is_forbidden_col(to.col), "{mv}");
                }
            }
        }
    }
}

#[test]
fn test_ball_in_forbidden_column_cannot_have_been_pushed_there() {
    let board = parse(
        "\
-- -- -- -- -- -- --
-- -- -- -- -- -- --
-- -- -- -- -- WA NB
-- -- -- -- -- -- --
-- -- -- -- -- -- --
-- -- -- -- -- -- --
",
        RuleSet::classic(),
    );
    let pushes = previous_moves_for(&board, Player::White)
        .into_iter()
        .filter(|(mv, _)| mv.kind() == MoveKind::Push)
        .count();
    assert_eq!(pushes, 0);
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[test]
fn test_defender_push_and_reconstruction() {
    //! White defender beside the ball on a 6×7 board: exactly one push, and
    //! the retrograde generator recovers the starting position from it

    let mut board = chessball_engine::Board::new(RuleSet::classic());
    board
        .place(Cell::new(2, 3), Piece::Defender(Player::White))
        .unwrap();
    board.place(Cell::new(2, 4), Piece::Ball).unwrap();

    let pushes: Vec<_> = moves_for(&board, Player::White)
        .into_iter()
        .filter(|(mv, _)| mv.kind() == MoveKind::Push)
        .collect();
    assert_eq!(pushes.len(), 1);

    let (mv, after) = &pushes[0];
    assert_eq!(mv.to(), Cell::new(2, 4));
    assert_eq!(mv.ball_to(), Some(Cell::new(2, 5)));
    assert_eq!(
        after.piece_at(Cell::new(2, 4)),
        Some(Piece::Defender(Player::White))
    );
    assert_eq!(after.find_ball(), Some(Cell::new(2, 5)));

    let back = previous_moves_for(after, Player::White);
    assert!(back.iter().any(|(m, prev)| m == mv && *prev == board));
}
