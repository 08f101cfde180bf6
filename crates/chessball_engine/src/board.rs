//! Board representation and grid helpers
//!
//! The board is a row-major `Vec<Option<Piece>>` plus the [`RuleSet`] it is
//! played under. Boards are plain values: generators hand out independent
//! clones and never mutate a board after returning it.

use crate::error::{ChessBallError, ChessBallResult};
use crate::rules::{RuleSet, Variant};
use crate::types::{Cell, Direction, Piece, PieceKind, Player};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rules: RuleSet,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Empty board for a rule set
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            cells: vec![None; rules.rows() * rules.cols()],
        }
    }

    /// Empty board for one of the standard variants
    pub fn empty(variant: Variant) -> Self {
        Self::new(variant.rules())
    }

    #[inline]
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rules.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.rules.cols()
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows() && cell.col < self.cols()
    }

    /// `Ok(())` when `cell` lies on the grid
    pub fn check(&self, cell: Cell) -> ChessBallResult<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(ChessBallError::OutOfBounds {
                row: cell.row,
                col: cell.col,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        cell.row * self.cols() + cell.col
    }

    /// Piece at `cell`, failing for off-grid coordinates
    pub fn get(&self, cell: Cell) -> ChessBallResult<Option<Piece>> {
        self.check(cell)?;
        Ok(self.cells[self.index(cell)])
    }

    /// Piece at `cell`, `None` for empty or off-grid cells
    #[inline]
    pub fn piece_at(&self, cell: Cell) -> Option<Piece> {
        if self.contains(cell) {
            self.cells[self.index(cell)]
        } else {
            None
        }
    }

    #[inline]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.contains(cell) && self.cells[self.index(cell)].is_none()
    }

    /// Put `piece` on `cell`, replacing whatever was there
    pub fn place(&mut self, cell: Cell, piece: Piece) -> ChessBallResult<()> {
        self.check(cell)?;
        self.put(cell, Some(piece));
        Ok(())
    }

    /// Clear `cell`, returning the piece that stood there
    pub fn remove(&mut self, cell: Cell) -> ChessBallResult<Option<Piece>> {
        self.check(cell)?;
        Ok(self.take(cell))
    }

    #[inline]
    pub(crate) fn put(&mut self, cell: Cell, piece: Option<Piece>) {
        let idx = self.index(cell);
        self.cells[idx] = piece;
    }

    #[inline]
    pub(crate) fn take(&mut self, cell: Cell) -> Option<Piece> {
        let idx = self.index(cell);
        self.cells[idx].take()
    }

    /// All occupied cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        let cols = self.cols();
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, slot)| slot.map(|p| (Cell::new(i / cols, i % cols), p)))
    }

    /// Cells holding `player`'s pieces in row-major order
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        self.iter().filter(move |(_, p)| p.belongs_to(player))
    }

    /// First cell (row-major) holding a piece of `kind`
    pub fn find(&self, kind: PieceKind) -> Option<Cell> {
        self.iter()
            .find(|(_, p)| p.kind() == kind)
            .map(|(cell, _)| cell)
    }

    #[inline]
    pub fn find_ball(&self) -> Option<Cell> {
        self.find(PieceKind::Ball)
    }

    /// Column 0 and the last column; a pushed ball may never land there
    #[inline]
    pub fn is_forbidden_col(&self, col: usize) -> bool {
        col == 0 || col + 1 == self.cols()
    }

    /// Row on which `player` wins once the ball arrives
    #[inline]
    pub fn goal_row(&self, player: Player) -> usize {
        match player {
            Player::White => self.rows() - 1,
            Player::Black => 0,
        }
    }

    /// `n` steps from `cell` along `dir`, `None` once off the grid
    pub fn step(&self, cell: Cell, dir: Direction, n: isize) -> Option<Cell> {
        let row = cell.row as isize + dir.dr * n;
        let col = cell.col as isize + dir.dc * n;
        if row < 0 || col < 0 {
            return None;
        }
        let target = Cell::new(row as usize, col as usize);
        self.contains(target).then_some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{N, SE};

    #[test]
    fn test_place_get_remove() {
        let mut board = Board::empty(Variant::Classic);
        board.place(Cell::new(2, 3), Piece::Ball).unwrap();
        assert_eq!(board.get(Cell::new(2, 3)).unwrap(), Some(Piece::Ball));
        assert_eq!(board.find_ball(), Some(Cell::new(2, 3)));
        assert_eq!(board.remove(Cell::new(2, 3)).unwrap(), Some(Piece::Ball));
        assert_eq!(board.find_ball(), None);
    }

    #[test]
    fn test_out_of_bounds_is_an_error() {
        let mut board = Board::empty(Variant::Classic);
        let err = board.place(Cell::new(6, 0), Piece::Ball).unwrap_err();
        assert_eq!(
            err,
            ChessBallError::OutOfBounds {
                row: 6,
                col: 0,
                rows: 6,
                cols: 7
            }
        );
        assert!(board.get(Cell::new(0, 7)).is_err());
        assert!(board.remove(Cell::new(9, 9)).is_err());
    }

    #[test]
    fn test_forbidden_columns_and_goal_rows() {
        let board = Board::empty(Variant::Extended);
        assert!(board.is_forbidden_col(0));
        assert!(board.is_forbidden_col(5));
        assert!(!board.is_forbidden_col(1));
        assert_eq!(board.goal_row(Player::White), 6);
        assert_eq!(board.goal_row(Player::Black), 0);
    }

    #[test]
    fn test_step_stays_on_grid() {
        let board = Board::empty(Variant::Classic);
        assert_eq!(board.step(Cell::new(0, 0), N, 1), None);
        assert_eq!(board.step(Cell::new(0, 0), SE, 2), Some(Cell::new(2, 2)));
        assert_eq!(board.step(Cell::new(4, 5), SE, 2), None);
    }

    #[test]
    fn test_find_scans_row_major() {
        let mut board = Board::empty(Variant::Classic);
        board.place(Cell::new(3, 1), Piece::Defender(Player::Black)).unwrap();
        board.place(Cell::new(1, 5), Piece::Defender(Player::White)).unwrap();
        assert_eq!(board.find(PieceKind::Defender), Some(Cell::new(1, 5)));
        assert_eq!(board.pieces_of(Player::Black).count(), 1);
    }
}
