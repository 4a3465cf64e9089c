//! Move coordinates on the 3x3 grid.

use crate::error::{RulesError, RulesErrorKind};
use serde::{Deserialize, Serialize};

/// A move: the (row, column) of the square to mark, both in `0..=2`.
///
/// Serialized as a `[row, col]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Move {
    row: u8,
    col: u8,
}

impl Move {
    /// All nine squares in row-major order.
    pub const ALL: [Move; 9] = [
        Move::at(0, 0),
        Move::at(0, 1),
        Move::at(0, 2),
        Move::at(1, 0),
        Move::at(1, 1),
        Move::at(1, 2),
        Move::at(2, 0),
        Move::at(2, 1),
        Move::at(2, 2),
    ];

    const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a move at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either coordinate exceeds 2.
    #[track_caller]
    pub fn new(row: u8, col: u8) -> Result<Self, RulesError> {
        if row > 2 || col > 2 {
            return Err(RulesError::new(RulesErrorKind::OutOfBounds { row, col }));
        }
        Ok(Self::at(row, col))
    }

    /// Row of the square (0 = top).
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column of the square (0 = left).
    pub fn col(self) -> u8 {
        self.col
    }

    /// Converts the move to its row-major board index (0-8).
    pub fn index(self) -> usize {
        usize::from(self.row) * 3 + usize::from(self.col)
    }

    /// Creates a move from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl TryFrom<(u8, u8)> for Move {
    type Error = RulesError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Move> for (u8, u8) {
    fn from(mv: Move) -> Self {
        (mv.row, mv.col)
    }
}
