//! # ChessBall Core Types
//!
//! ## Overview
//!
//! This module defines the value types shared by every part of the engine: the
//! two sides, the pieces they own, grid coordinates, movement directions and the
//! move record produced by both forward and retrograde generation.
//!
//! ## Pieces and Ownership
//!
//! A piece is either an attacker or a defender belonging to one side, or the
//! single neutral ball. Encoding ownership inside the enum variant means a
//! "white ball" or a "neutral attacker" cannot be constructed at all, so every
//! consumer can match on [`Piece`] without a fallback arm for nonsense states.
//!
//! ## The `Move` Record
//!
//! A [`Move`] names every cell a move touches:
//!
//! | Variant  | Mover      | Second piece                          |
//! |----------|------------|---------------------------------------|
//! | `Simple` | from → to  | none                                  |
//! | `Push`   | from → to  | ball: `to` → `ball_to`                |
//! | `Jump`   | from → to  | piece at `over` stays put             |
//! | `Tackle` | from → to  | opponent: `to` → `displaced_to`       |
//!
//! The second piece of a push or tackle always starts on the mover's
//! destination, so the record stores only where it ends up.
//!
//! The same record is emitted by retrograde generation. There it reads "applying
//! this move to the predecessor yields the current board", which is what makes
//! forward and backward generation exact mirrors of each other.

use crate::board::Board;
use crate::error::{ChessBallError, ChessBallResult};
use std::fmt;

/// One of the two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// Both sides, White first
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    /// The other side
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Owner initial used by the board notation
    #[inline]
    pub fn initial(self) -> char {
        match self {
            Player::White => 'W',
            Player::Black => 'B',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// Piece kind, independent of owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Attacker,
    Defender,
    Ball,
}

impl PieceKind {
    /// Kind initial used by the board notation
    #[inline]
    pub fn initial(self) -> char {
        match self {
            PieceKind::Attacker => 'A',
            PieceKind::Defender => 'D',
            PieceKind::Ball => 'B',
        }
    }
}

/// A piece on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Attacker(Player),
    Defender(Player),
    Ball,
}

impl Piece {
    #[inline]
    pub fn kind(self) -> PieceKind {
        match self {
            Piece::Attacker(_) => PieceKind::Attacker,
            Piece::Defender(_) => PieceKind::Defender,
            Piece::Ball => PieceKind::Ball,
        }
    }

    /// Owning side, `None` for the neutral ball
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Piece::Attacker(p) | Piece::Defender(p) => Some(p),
            Piece::Ball => None,
        }
    }

    #[inline]
    pub fn is_ball(self) -> bool {
        matches!(self, Piece::Ball)
    }

    #[inline]
    pub fn belongs_to(self, player: Player) -> bool {
        self.owner() == Some(player)
    }

    /// Two-character notation token, e.g. `WA`, `BD`, `NB`
    pub fn token(self) -> String {
        let owner = self.owner().map_or('N', Player::initial);
        let mut token = String::with_capacity(2);
        token.push(owner);
        token.push(self.kind().initial());
        token
    }

    /// Parse a notation token. Returns `None` for unknown initials and for
    /// incoherent pairs such as `NA` or `WB`.
    pub fn from_token(token: &str) -> Option<Piece> {
        let mut chars = token.chars();
        let (owner, kind) = (chars.next()?, chars.next()?);
        if chars.next().is_some() {
            return None;
        }
        let player = match owner {
            'W' => Some(Player::White),
            'B' => Some(Player::Black),
            'N' => None,
            _ => return None,
        };
        match (player, kind) {
            (Some(p), 'A') => Some(Piece::Attacker(p)),
            (Some(p), 'D') => Some(Piece::Defender(p)),
            (None, 'B') => Some(Piece::Ball),
            _ => None,
        }
    }
}

/// Grid coordinate, row-major, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Unit step between neighbouring cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: isize,
    pub dc: isize,
}

impl Direction {
    pub const fn new(dr: isize, dc: isize) -> Self {
        Self { dr, dc }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            dr: -self.dr,
            dc: -self.dc,
        }
    }
}

/// Discriminant of a [`Move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Simple,
    Push,
    Jump,
    Tackle,
}

/// A move record, shared by forward and retrograde generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Step to an adjacent empty cell
    Simple { from: Cell, to: Cell },
    /// Step onto the ball, which travels one cell further
    Push { from: Cell, to: Cell, ball_to: Cell },
    /// Attacker leaps over an adjacent piece
    Jump { from: Cell, to: Cell, over: Cell },
    /// Defender steps onto an opponent, shoving it one cell further
    Tackle {
        from: Cell,
        to: Cell,
        displaced_to: Cell,
    },
}

impl Move {
    #[inline]
    pub fn from(&self) -> Cell {
        match *self {
            Move::Simple { from, .. }
            | Move::Push { from, .. }
            | Move::Jump { from, .. }
            | Move::Tackle { from, .. } => from,
        }
    }

    #[inline]
    pub fn to(&self) -> Cell {
        match *self {
            Move::Simple { to, .. }
            | Move::Push { to, .. }
            | Move::Jump { to, .. }
            | Move::Tackle { to, .. } => to,
        }
    }

    pub fn kind(&self) -> MoveKind {
        match self {
            Move::Simple { .. } => MoveKind::Simple,
            Move::Push { .. } => MoveKind::Push,
            Move::Jump { .. } => MoveKind::Jump,
            Move::Tackle { .. } => MoveKind::Tackle,
        }
    }

    /// Ball source of a push
    pub fn ball_from(&self) -> Option<Cell> {
        match *self {
            Move::Push { to, .. } => Some(to),
            _ => None,
        }
    }

    /// Ball destination of a push
    pub fn ball_to(&self) -> Option<Cell> {
        match *self {
            Move::Push { ball_to, .. } => Some(ball_to),
            _ => None,
        }
    }

    /// Source of the piece shoved by a tackle
    pub fn displaced_from(&self) -> Option<Cell> {
        match *self {
            Move::Tackle { to, .. } => Some(to),
            _ => None,
        }
    }

    /// Destination of the piece shoved by a tackle
    pub fn displaced_to(&self) -> Option<Cell> {
        match *self {
            Move::Tackle { displaced_to, .. } => Some(displaced_to),
            _ => None,
        }
    }

    /// Cell jumped over by a jump
    pub fn jumped_over(&self) -> Option<Cell> {
        match *self {
            Move::Jump { over, .. } => Some(over),
            _ => None,
        }
    }

    fn cells(&self) -> [Option<Cell>; 3] {
        [
            Some(self.from()),
            Some(self.to()),
            self.ball_to().or(self.displaced_to()).or(self.jumped_over()),
        ]
    }

    fn check_cells(&self, board: &Board) -> ChessBallResult<()> {
        for cell in self.cells().into_iter().flatten() {
            board.check(cell)?;
        }
        Ok(())
    }

    /// Replay this move on `board`, returning the successor.
    ///
    /// Only the geometry is checked (every cell on the grid, a piece on the
    /// mover's cell). Use [`crate::api::do_move`] for a legality-checked move.
    pub fn apply(&self, board: &Board) -> ChessBallResult<Board> {
        self.check_cells(board)?;
        let from = self.from();
        if board.piece_at(from).is_none() {
            return Err(ChessBallError::EmptySource {
                row: from.row,
                col: from.col,
            });
        }
        Ok(self.apply_unchecked(board))
    }

    /// Undo this move on `board`, returning the predecessor.
    pub fn revert(&self, board: &Board) -> ChessBallResult<Board> {
        self.check_cells(board)?;
        let to = self.to();
        if board.piece_at(to).is_none() {
            return Err(ChessBallError::EmptySource {
                row: to.row,
                col: to.col,
            });
        }
        Ok(self.revert_unchecked(board))
    }

    /// Replay on a board whose cells are known to be in bounds
    pub(crate) fn apply_unchecked(&self, board: &Board) -> Board {
        let mut next = board.clone();
        let mover = next.take(self.from());
        match *self {
            Move::Simple { to, .. } | Move::Jump { to, .. } => {
                next.put(to, mover);
            }
            Move::Push { to, ball_to, .. } => {
                next.put(to, mover);
                next.put(ball_to, Some(Piece::Ball));
            }
            Move::Tackle {
                to, displaced_to, ..
            } => {
                let shoved = next.take(to);
                next.put(displaced_to, shoved);
                next.put(to, mover);
            }
        }
        next
    }

    /// Undo on a board whose cells are known to be in bounds
    pub(crate) fn revert_unchecked(&self, board: &Board) -> Board {
        let mut prev = board.clone();
        let mover = prev.take(self.to());
        match *self {
            Move::Simple { from, .. } | Move::Jump { from, .. } => {
                prev.put(from, mover);
            }
            Move::Push {
                from, to, ball_to, ..
            } => {
                let ball = prev.take(ball_to);
                prev.put(to, ball);
                prev.put(from, mover);
            }
            Move::Tackle {
                from,
                to,
                displaced_to,
            } => {
                let shoved = prev.take(displaced_to);
                prev.put(to, shoved);
                prev.put(from, mover);
            }
        }
        prev
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from(), self.to())?;
        match *self {
            Move::Simple { .. } => Ok(()),
            Move::Push { ball_to, .. } => write!(f, " (push ball -> {})", ball_to),
            Move::Jump { over, .. } => write!(f, " (jump over {})", over),
            Move::Tackle {
                to, displaced_to, ..
            } => write!(f, " (tackle {} -> {})", to, displaced_to),
        }
    }
}
