//! One-ply threat detection.

use crate::rules::{Board, Move, Player};

/// Moves that win on the spot for `player`, who must be the side to move.
pub fn winning_replies(board: &Board, player: Player) -> Vec<Move> {
    debug_assert_eq!(board.active_player(), player);
    board
        .legal_moves()
        .into_iter()
        .filter(|&mv| board.place(mv).winner() == Some(player))
        .collect()
}

/// True if `opponent`, to move at `board`, has a reply that wins at once.
pub fn opponent_can_win_next(board: &Board, opponent: Player) -> bool {
    debug_assert_eq!(board.active_player(), opponent);
    board
        .legal_moves()
        .into_iter()
        .any(|mv| board.place(mv).winner() == Some(opponent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_column_is_a_threat() {
        // O holds (0,0) and (1,0); X has just played elsewhere.
        let board: Board = "OX./O.X/..X".parse().unwrap();
        assert!(opponent_can_win_next(&board, Player::O));
        assert_eq!(
            winning_replies(&board, Player::O),
            vec![Move::new(2, 0).unwrap()]
        );
    }

    #[test]
    fn test_blocked_line_is_not_a_threat() {
        let board: Board = "OX./O.X/X..".parse().unwrap();
        assert_eq!(board.active_player(), Player::O);
        assert!(!opponent_can_win_next(&board, Player::O));
        assert!(winning_replies(&board, Player::O).is_empty());
    }

    #[test]
    fn test_full_board_has_no_replies() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert!(!opponent_can_win_next(&board, Player::O));
    }
}
