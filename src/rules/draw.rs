//! Draw detection logic for tic-tac-toe.

use super::{Board, Square};

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

impl Board {
    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        is_full(self)
    }
}
