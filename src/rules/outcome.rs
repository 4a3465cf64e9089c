//! Outcome classification and terminal utility.

use super::{Board, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Status of a position.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player has three in a row.
    #[display("{_0} wins")]
    Won(Player),
    /// The board is full with no line.
    #[display("Draw")]
    Draw,
    /// Moves remain and nobody has won.
    #[display("In progress")]
    InProgress,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }

    /// True for wins and draws.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// +1 when X won, -1 when O won, 0 otherwise.
    pub fn utility(self) -> i32 {
        match self {
            Outcome::Won(Player::X) => 1,
            Outcome::Won(Player::O) => -1,
            Outcome::Draw | Outcome::InProgress => 0,
        }
    }
}

impl Board {
    /// Classifies the position: a line wins, a full board draws, otherwise
    /// play continues.
    pub fn outcome(&self) -> Outcome {
        if let Some(player) = self.winner() {
            Outcome::Won(player)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// True if the game is over.
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Value of the position from X's perspective.
    ///
    /// Only meaningful for terminal positions; an unfinished game scores 0.
    pub fn utility(&self) -> i32 {
        self.outcome().utility()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_in_progress() {
        let board = Board::initial();
        assert_eq!(board.outcome(), Outcome::InProgress);
        assert!(!board.is_terminal());
        assert_eq!(board.utility(), 0);
    }

    #[test]
    fn test_utility_signs() {
        let x_wins: Board = "XXX/OO./...".parse().unwrap();
        let o_wins: Board = "XX./OOO/X.X".parse().unwrap();
        let draw: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(x_wins.utility(), 1);
        assert_eq!(o_wins.utility(), -1);
        assert_eq!(draw.utility(), 0);
        assert_eq!(draw.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_display() {
        assert_eq!(Outcome::Won(Player::O).to_string(), "O wins");
        assert_eq!(Outcome::Draw.to_string(), "Draw");
    }
}
