//! Game lifecycle
//!
//! Standard starting positions. In both variants Black starts on the top rows
//! and White on the bottom rows with the ball between them; each side scores on
//! its own back row (White on the last row, Black on row 0).

use crate::board::Board;
use crate::rules::Variant;
use crate::types::{Cell, Piece, Player};

const CLASSIC_LAYOUT: &[(usize, usize, Piece)] = &[
    (0, 1, Piece::Defender(Player::Black)),
    (0, 3, Piece::Defender(Player::Black)),
    (0, 5, Piece::Defender(Player::Black)),
    (1, 2, Piece::Attacker(Player::Black)),
    (1, 4, Piece::Attacker(Player::Black)),
    (2, 3, Piece::Ball),
    (4, 2, Piece::Attacker(Player::White)),
    (4, 4, Piece::Attacker(Player::White)),
    (5, 1, Piece::Defender(Player::White)),
    (5, 3, Piece::Defender(Player::White)),
    (5, 5, Piece::Defender(Player::White)),
];

const EXTENDED_LAYOUT: &[(usize, usize, Piece)] = &[
    (0, 2, Piece::Defender(Player::Black)),
    (0, 3, Piece::Defender(Player::Black)),
    (0, 4, Piece::Defender(Player::Black)),
    (1, 2, Piece::Attacker(Player::Black)),
    (1, 3, Piece::Attacker(Player::Black)),
    (3, 3, Piece::Ball),
    (5, 2, Piece::Attacker(Player::White)),
    (5, 3, Piece::Attacker(Player::White)),
    (6, 2, Piece::Defender(Player::White)),
    (6, 3, Piece::Defender(Player::White)),
    (6, 4, Piece::Defender(Player::White)),
];

/// Starting position of `variant`
pub fn starting_position(variant: Variant) -> Board {
    let layout = match variant {
        Variant::Classic => CLASSIC_LAYOUT,
        Variant::Extended => EXTENDED_LAYOUT,
    };
    let mut board = Board::empty(variant);
    for &(row, col, piece) in layout {
        board.put(Cell::new(row, col), Some(piece));
    }
    board
}

/// Create a new game: the starting position, White to move
pub fn new_game(variant: Variant) -> Board {
    starting_position(variant)
}
