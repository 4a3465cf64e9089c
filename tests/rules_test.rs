//! Tests for the board and rules model.

use std::collections::HashSet;
use tictactoe_minimax::{Board, Move, Outcome, Player, RulesErrorKind, Square};

/// Every position reachable from the empty board, terminal ones included.
fn reachable() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::initial()];
    let mut boards = Vec::new();
    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        if board.is_terminal() {
            continue;
        }
        for mv in board.legal_moves() {
            stack.push(board.apply(mv).unwrap());
        }
    }
    boards
}

#[test]
fn test_initial_board() {
    let board = Board::initial();
    assert_eq!(board, Board::default());
    assert_eq!(board.outcome(), Outcome::InProgress);
    assert_eq!(board.active_player(), Player::X);
    assert_eq!(board.legal_moves().len(), 9);
    assert_eq!(board.legal_moves(), Move::ALL.to_vec());
}

#[test]
fn test_reachable_position_count() {
    assert_eq!(reachable().len(), 5478);
}

#[test]
fn test_active_player_alternates() {
    for board in reachable().into_iter().filter(|b| !b.is_terminal()) {
        let mover = board.active_player();
        for mv in board.legal_moves() {
            let next = board.apply(mv).unwrap();
            assert_eq!(next.active_player(), mover.opponent());
            assert_eq!(next.get(mv), Square::Occupied(mover));
        }
    }
}

#[test]
fn test_apply_does_not_mutate() {
    let board = Board::initial();
    let next = board.apply(Move::new(1, 1).unwrap()).unwrap();
    assert_eq!(board, Board::initial());
    assert_eq!(next.count(Player::X), 1);
}

#[test]
fn test_apply_occupied_square_always_fails() {
    for board in reachable() {
        for mv in Move::ALL.into_iter().filter(|&mv| !board.is_empty(mv)) {
            let err = board.apply(mv).unwrap_err();
            assert_eq!(err.kind, RulesErrorKind::InvalidMove(mv));
        }
    }
}

#[test]
fn test_legal_moves_are_empty_squares_in_order() {
    let board: Board = "X.O/.X./O..".parse().unwrap();
    let expected: Vec<Move> = [(0, 1), (1, 0), (1, 2), (2, 1), (2, 2)]
        .into_iter()
        .map(|(r, c)| Move::new(r, c).unwrap())
        .collect();
    assert_eq!(board.legal_moves(), expected);
}

#[test]
fn test_full_board_without_line_is_draw() {
    for board in reachable().into_iter().filter(|b| b.is_full()) {
        if board.winner().is_none() {
            assert_eq!(board.outcome(), Outcome::Draw);
            assert!(board.legal_moves().is_empty());
        }
    }
}

#[test]
fn test_alternating_grid_is_draw() {
    use Player::{O, X};
    let a = Square::Occupied(X);
    let b = Square::Occupied(O);
    // These counts (4 X, 5 O) cannot come from legal play; line checks
    // still classify the grid.
    let board = Board::from_rows_unchecked([[a, b, a], [b, a, b], [b, a, b]]);
    assert_eq!(board.outcome(), Outcome::Draw);
    assert!(board.is_terminal());
    assert!(Board::from_rows([[a, b, a], [b, a, b], [b, a, b]]).is_err());
}

#[test]
fn test_is_terminal_matches_outcome() {
    for board in reachable() {
        let terminal = matches!(board.outcome(), Outcome::Won(_) | Outcome::Draw);
        assert_eq!(board.is_terminal(), terminal);
    }
    assert!(!Board::initial().is_terminal());
    assert!("XXX/OO./...".parse::<Board>().unwrap().is_terminal());
}

#[test]
fn test_utility_follows_outcome() {
    for board in reachable() {
        let expected = match board.outcome() {
            Outcome::Won(Player::X) => 1,
            Outcome::Won(Player::O) => -1,
            Outcome::Draw | Outcome::InProgress => 0,
        };
        assert_eq!(board.utility(), expected);
    }
}

#[test]
fn test_from_rows_validates_counts() {
    let x = Square::Occupied(Player::X);
    let e = Square::Empty;
    assert!(Board::from_rows([[x, e, e], [e, e, e], [e, e, e]]).is_ok());
    let err = Board::from_rows([[x, x, e], [e, e, e], [e, e, e]]).unwrap_err();
    assert!(matches!(err.kind, RulesErrorKind::InvalidPosition(_)));
}
