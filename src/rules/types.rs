//! Core domain types for tic-tac-toe positions.

use super::Move;
use crate::error::{RulesError, RulesErrorKind};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// A 3x3 tic-tac-toe position.
///
/// Boards are values: every transition returns a new board and leaves the
/// receiver untouched. Whose turn it is is never stored, it is derived from
/// the mark counts (see [`Board::active_player`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// The starting position: all nine squares empty.
    pub fn initial() -> Self {
        Self::new()
    }

    /// Builds a board from three rows of three squares.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPosition` unless X has played as many marks as O or
    /// exactly one more.
    #[instrument]
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Result<Self, RulesError> {
        Self::from_squares(Self::from_rows_unchecked(rows).squares)
    }

    /// Builds a board from three rows without checking mark counts.
    ///
    /// Line and draw classification work on any grid; turn derivation and
    /// search assume the counts could arise from alternating play.
    pub fn from_rows_unchecked(rows: [[Square; 3]; 3]) -> Self {
        let mut squares = [Square::Empty; 9];
        for (r, row) in rows.iter().enumerate() {
            squares[r * 3..r * 3 + 3].copy_from_slice(row);
        }
        Self { squares }
    }

    /// Builds a board from nine squares in row-major order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPosition` when the mark counts could not arise from
    /// alternating play starting with X.
    pub fn from_squares(squares: [Square; 9]) -> Result<Self, RulesError> {
        let board = Self { squares };
        let (x, o) = (board.count(Player::X), board.count(Player::O));
        if x == o || x == o + 1 {
            Ok(board)
        } else {
            Err(RulesError::new(RulesErrorKind::InvalidPosition(format!(
                "X has {} marks and O has {}; X must have as many as O or one more",
                x, o
            ))))
        }
    }

    /// Gets the square addressed by `mv`.
    pub fn get(&self, mv: Move) -> Square {
        self.squares[mv.index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// The player whose turn it is.
    ///
    /// Whoever has played fewer marks moves next; X moves on equal counts.
    pub fn active_player(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Every empty square, in row-major order.
    ///
    /// The order is part of the contract: the search breaks ties in favour of
    /// the move enumerated first.
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::ALL
            .iter()
            .copied()
            .filter(|&mv| self.is_empty(mv))
            .collect()
    }

    /// Returns the board after the active player marks `mv`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMove` if the square is already occupied.
    #[instrument(skip(self), fields(player = %self.active_player()))]
    pub fn apply(&self, mv: Move) -> Result<Self, RulesError> {
        if !self.is_empty(mv) {
            return Err(RulesError::new(RulesErrorKind::InvalidMove(mv)));
        }
        Ok(self.place(mv))
    }

    /// Applies a move known to target an empty square (unchecked - use
    /// [`Board::apply`] for validation).
    pub(crate) fn place(&self, mv: Move) -> Self {
        debug_assert!(self.is_empty(mv), "place on occupied square {}", mv);
        let mut next = *self;
        next.squares[mv.index()] = Square::Occupied(self.active_player());
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
