//! Win detection logic for tic-tac-toe.

use super::{Board, Move, Player, Square};
use strum::IntoEnumIterator;

/// The eight lines of three: rows, columns, diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::ALL[0], Move::ALL[1], Move::ALL[2]],
    [Move::ALL[3], Move::ALL[4], Move::ALL[5]],
    [Move::ALL[6], Move::ALL[7], Move::ALL[8]],
    // Columns
    [Move::ALL[0], Move::ALL[3], Move::ALL[6]],
    [Move::ALL[1], Move::ALL[4], Move::ALL[7]],
    [Move::ALL[2], Move::ALL[5], Move::ALL[8]],
    // Diagonals
    [Move::ALL[0], Move::ALL[4], Move::ALL[8]],
    [Move::ALL[2], Move::ALL[4], Move::ALL[6]],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row, `None`
/// otherwise. X's lines are checked before O's; a board where both have a
/// line cannot arise from legal play.
pub fn check_winner(board: &Board) -> Option<Player> {
    Player::iter().find(|&player| {
        let mark = Square::Occupied(player);
        LINES
            .iter()
            .any(|line| line.iter().all(|&mv| board.get(mv) == mark))
    })
}

impl Board {
    /// The player with three in a row, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(check_winner(&board("XXX/OO./...")), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(check_winner(&board("XOX/.OX/.O.")), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        assert_eq!(check_winner(&board("OXX/.O./X.O")), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(check_winner(&board("OOX/.X./X..")), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("XX./O../O..")), None);
    }
}
