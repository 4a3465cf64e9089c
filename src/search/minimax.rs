//! Exhaustive minimax search for the best move.
//!
//! The recursive evaluator does not alternate between maximizing and
//! minimizing by ply. It keeps the root player's objective at every level:
//! a root X maximizes everywhere, a root O minimizes everywhere, while the
//! mover still alternates through move application. Scores therefore
//! describe the best terminal reachable if both sides cooperate with the
//! root player. The root-level checks in [`best_move`] (take an immediate
//! win, skip an immediate loss, reject moves that hand the opponent a win
//! next ply) cover the cases that evaluator cannot see. Changing one side of
//! this pairing without the other changes which moves get played.

use super::threats::opponent_can_win_next;
use crate::error::{SearchError, SearchErrorKind};
use crate::rules::{Board, Move, Player};
use tracing::{debug, instrument};

/// Score no result can fall below.
pub const WORST_SCORE: i32 = i32::MIN;
/// Score no result can rise above.
pub const BEST_SCORE: i32 = i32::MAX;

/// Starting best score for `player`: worse than every real score.
pub(crate) fn initial_best(player: Player) -> i32 {
    match player {
        Player::X => WORST_SCORE,
        Player::O => BEST_SCORE,
    }
}

/// True if `score` is strictly better than `best` for `player`.
///
/// Ties do not improve, so the first move reaching a score keeps it.
pub(crate) fn improves(player: Player, score: i32, best: i32) -> bool {
    match player {
        Player::X => score > best,
        Player::O => score < best,
    }
}

/// Value of `board` under play optimized for `root` at every ply.
///
/// Terminal boards score their utility (+1 X won, -1 O won, 0 draw).
/// Otherwise the children are combined with `max` when `root` is X and
/// `min` when `root` is O, regardless of who is to move at `board`.
pub fn minimax_value(board: &Board, root: Player) -> i32 {
    let mut nodes = 0;
    evaluate(board, root, &mut nodes)
}

/// [`minimax_value`] that also counts visited nodes.
pub(crate) fn evaluate(board: &Board, root: Player, nodes: &mut u64) -> i32 {
    *nodes += 1;
    if board.is_terminal() {
        return board.utility();
    }

    board
        .legal_moves()
        .into_iter()
        .map(|mv| evaluate(&board.place(mv), root, nodes))
        .fold(initial_best(root), |best, score| match root {
            Player::X => best.max(score),
            Player::O => best.min(score),
        })
}

/// Returns the move the engine plays for the side to move.
///
/// Moves are examined in row-major order. The first move that wins on the
/// spot is returned without looking further. Moves that leave the opponent a
/// winning reply are never selected. Among the rest the strictly best
/// [`minimax_value`] wins and ties go to the earlier move.
///
/// `Ok(None)` means no move passed those filters, for example when the
/// opponent has two open threats. Callers must handle it separately from a
/// concrete move.
///
/// # Errors
///
/// Returns `PreconditionViolation` if `board` is already terminal.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn best_move(board: &Board) -> Result<Option<Move>, SearchError> {
    let outcome = board.outcome();
    if outcome.is_terminal() {
        return Err(SearchError::new(SearchErrorKind::PreconditionViolation(
            outcome,
        )));
    }

    let current = board.active_player();
    let opponent = current.opponent();

    let mut best_action = None;
    let mut best_score = initial_best(current);

    for mv in board.legal_moves() {
        let next = board.place(mv);

        match next.winner() {
            Some(winner) if winner == current => {
                debug!(%mv, player = %current, "Immediate win");
                return Ok(Some(mv));
            }
            Some(_) => {
                debug!(%mv, "Move loses immediately, skipping");
                continue;
            }
            None => {}
        }

        let opponent_winning_move = opponent_can_win_next(&next, opponent);
        let score = minimax_value(&next, current);

        if opponent_winning_move {
            debug!(%mv, score, "Opponent has a winning reply, move disqualified");
        } else if improves(current, score, best_score) {
            debug!(%mv, score, "New best move");
            best_score = score;
            best_action = Some(mv);
        }
    }

    match best_action {
        Some(mv) => debug!(%mv, best_score, "Search complete"),
        None => debug!("No optimal move found"),
    }
    Ok(best_action)
}
