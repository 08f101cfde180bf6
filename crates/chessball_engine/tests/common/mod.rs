//! Shared board builders for engine integration tests

#![allow(dead_code)]

use chessball_engine::{Board, Cell, Piece, Player, RuleSet, Variant};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn parse(text: &str, rules: RuleSet) -> Board {
    Board::parse(text, rules).expect("test board should parse")
}

/// Small 4×5 board with simple moves and pushes only
pub fn small_rules() -> RuleSet {
    RuleSet::new(4, 5, false, false).expect("valid dimensions")
}

/// Rule sets exercised by the exhaustive checks
pub fn all_rule_sets() -> Vec<RuleSet> {
    vec![
        Variant::Classic.rules(),
        Variant::Extended.rules(),
        RuleSet::new(3, 3, true, true).expect("valid dimensions"),
        RuleSet::new(5, 4, true, false).expect("valid dimensions"),
    ]
}

fn random_empty_cell(rng: &mut StdRng, board: &Board) -> Option<Cell> {
    let empties: Vec<Cell> = (0..board.rows())
        .flat_map(|r| (0..board.cols()).map(move |c| Cell::new(r, c)))
        .filter(|&c| board.is_empty(c))
        .collect();
    if empties.is_empty() {
        None
    } else {
        Some(empties[rng.random_range(0..empties.len())])
    }
}

/// Seeded random position: one ball (usually) and up to five pieces a side
pub fn random_board(rules: RuleSet, seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(rules);

    if rng.random_bool(0.9) {
        if let Some(cell) = random_empty_cell(&mut rng, &board) {
            board.place(cell, Piece::Ball).expect("cell on grid");
        }
    }
    for player in Player::ALL {
        let count = rng.random_range(1..=5);
        for _ in 0..count {
            let piece = if rng.random_bool(0.5) {
                Piece::Attacker(player)
            } else {
                Piece::Defender(player)
            };
            if let Some(cell) = random_empty_cell(&mut rng, &board) {
                board.place(cell, piece).expect("cell on grid");
            }
        }
    }
    board
}

/// Hand-made and random boards for every rule set
pub fn sample_boards() -> Vec<Board> {
    let mut boards = vec![
        chessball_engine::api::new_game(Variant::Classic),
        chessball_engine::api::new_game(Variant::Extended),
    ];
    for rules in all_rule_sets() {
        for seed in 0..60 {
            boards.push(random_board(rules, seed));
        }
    }
    boards
}
