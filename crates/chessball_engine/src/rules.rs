//! Rule sets and the two standard variants
//!
//! A [`RuleSet`] fixes the grid dimensions and which optional move kinds are
//! in play. Simple moves and pushes are always enabled; jumps (attackers) and
//! tackles (defenders) are switched on per rule set.

use crate::error::{ChessBallError, ChessBallResult};

/// Smallest playable grid: two goal rows and one non-forbidden column
pub const MIN_ROWS: usize = 2;
pub const MIN_COLS: usize = 3;

/// Standard variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Variant {
    /// 6 rows × 7 columns, simple moves and pushes
    Classic,
    /// 7 rows × 6 columns, adds attacker jumps and defender tackles
    #[default]
    Extended,
}

impl Variant {
    pub fn rules(self) -> RuleSet {
        match self {
            Variant::Classic => RuleSet {
                rows: 6,
                cols: 7,
                jumps: false,
                tackles: false,
            },
            Variant::Extended => RuleSet {
                rows: 7,
                cols: 6,
                jumps: true,
                tackles: true,
            },
        }
    }
}

/// Grid dimensions plus the enabled optional move kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleSet {
    rows: usize,
    cols: usize,
    jumps: bool,
    tackles: bool,
}

impl RuleSet {
    /// Custom rule set. Fails with [`ChessBallError::InvalidDimensions`] below
    /// 2 rows or 3 columns.
    pub fn new(rows: usize, cols: usize, jumps: bool, tackles: bool) -> ChessBallResult<Self> {
        if rows < MIN_ROWS || cols < MIN_COLS {
            return Err(ChessBallError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            jumps,
            tackles,
        })
    }

    pub fn classic() -> Self {
        Variant::Classic.rules()
    }

    pub fn extended() -> Self {
        Variant::Extended.rules()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn jumps(&self) -> bool {
        self.jumps
    }

    #[inline]
    pub fn tackles(&self) -> bool {
        self.tackles
    }
}

impl From<Variant> for RuleSet {
    fn from(variant: Variant) -> Self {
        variant.rules()
    }
}
