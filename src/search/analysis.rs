//! Per-candidate breakdown of a search.

use super::minimax::{evaluate, improves, initial_best};
use super::threats::opponent_can_win_next;
use crate::error::{SearchError, SearchErrorKind};
use crate::rules::{Board, Move, Player};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{info, instrument};

/// How the root search treats one legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CandidateVerdict {
    /// The move completes a line for the side to move.
    ImmediateWin,
    /// The move completes a line for the opponent.
    ImmediateLoss,
    /// The opponent could win with its next move; never selected.
    OpponentReplyWins {
        /// Evaluator score, reported for reference.
        score: i32,
    },
    /// Eligible, with its evaluator score.
    Scored {
        /// Evaluator score.
        score: i32,
    },
}

/// A legal move and its verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct Candidate {
    /// The move examined.
    mv: Move,
    /// What the search concluded about it.
    verdict: CandidateVerdict,
}

/// Full evaluation of a non-terminal position.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Analysis {
    /// Position analysed.
    board: Board,
    /// Side to move.
    player: Player,
    /// Every legal move in row-major order.
    candidates: Vec<Candidate>,
    /// The move [`best_move`](super::best_move) returns.
    best_move: Option<Move>,
    /// Score attached to `best_move`.
    best_score: Option<i32>,
    /// Nodes visited by the evaluator across all candidates.
    nodes: u64,
}

/// Evaluates every legal move without the immediate-win short circuit.
///
/// The selected move matches [`best_move`](super::best_move): the first
/// immediate win if there is one, otherwise the first strictly best score
/// among moves that give the opponent no winning reply.
///
/// # Errors
///
/// Returns `PreconditionViolation` if `board` is already terminal.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn analyze(board: &Board) -> Result<Analysis, SearchError> {
    let outcome = board.outcome();
    if outcome.is_terminal() {
        return Err(SearchError::new(SearchErrorKind::PreconditionViolation(
            outcome,
        )));
    }

    let player = board.active_player();
    let opponent = player.opponent();
    let mut nodes = 0;

    let candidates: Vec<Candidate> = board
        .legal_moves()
        .into_iter()
        .map(|mv| {
            let next = board.place(mv);
            let verdict = match next.winner() {
                Some(winner) if winner == player => CandidateVerdict::ImmediateWin,
                Some(_) => CandidateVerdict::ImmediateLoss,
                None => {
                    let score = evaluate(&next, player, &mut nodes);
                    if opponent_can_win_next(&next, opponent) {
                        CandidateVerdict::OpponentReplyWins { score }
                    } else {
                        CandidateVerdict::Scored { score }
                    }
                }
            };
            Candidate { mv, verdict }
        })
        .collect();

    let (best_move, best_score) = select(player, &candidates);
    info!(
        best_move = ?best_move,
        best_score = ?best_score,
        nodes,
        "Analysis complete"
    );

    Ok(Analysis {
        board: *board,
        player,
        candidates,
        best_move,
        best_score,
        nodes,
    })
}

fn select(player: Player, candidates: &[Candidate]) -> (Option<Move>, Option<i32>) {
    let win_score = match player {
        Player::X => 1,
        Player::O => -1,
    };
    if let Some(win) = candidates
        .iter()
        .find(|c| c.verdict == CandidateVerdict::ImmediateWin)
    {
        return (Some(win.mv), Some(win_score));
    }

    let mut best = None;
    let mut best_score = initial_best(player);
    for candidate in candidates {
        if let CandidateVerdict::Scored { score } = candidate.verdict
            && improves(player, score, best_score)
        {
            best_score = score;
            best = Some(candidate.mv);
        }
    }
    (best, best.map(|_| best_score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_every_legal_move() {
        let board: Board = "XX./XOO/.O.".parse().unwrap();
        let analysis = analyze(&board).unwrap();
        assert_eq!(analysis.candidates().len(), 3);
        assert_eq!(*analysis.player(), Player::X);
        // Both (0,2) and (2,0) win; the first is chosen.
        assert_eq!(
            *analysis.candidates()[0].verdict(),
            CandidateVerdict::ImmediateWin
        );
        assert_eq!(
            *analysis.candidates()[1].verdict(),
            CandidateVerdict::ImmediateWin
        );
        assert_eq!(*analysis.best_move(), Some(Move::new(0, 2).unwrap()));
        assert_eq!(*analysis.best_score(), Some(1));
    }

    #[test]
    fn test_terminal_rejected() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(analyze(&board).is_err());
    }
}
