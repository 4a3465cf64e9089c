//! Engine-vs-engine continuation of a position.

use super::minimax::best_move;
use crate::error::SearchError;
use crate::rules::{Board, Move, Outcome, Player};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Where a played move came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlySource {
    /// Chosen by [`best_move`].
    Searched,
    /// [`best_move`] found no move; the first legal move was played.
    Fallback,
}

/// One move of a play-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct Ply {
    /// Side that moved.
    player: Player,
    /// Square marked.
    mv: Move,
    /// How the move was chosen.
    source: PlySource,
    /// Position after the move.
    board: Board,
}

/// A game played to the end by the engine on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Playout {
    /// Starting position.
    start: Board,
    /// Moves in order.
    plies: Vec<Ply>,
    /// Terminal outcome.
    outcome: Outcome,
}

impl Playout {
    /// Position after the last ply.
    pub fn final_board(&self) -> Board {
        self.plies.last().map_or(self.start, |ply| ply.board)
    }
}

/// Plays `board` to the end with [`best_move`] choosing for both sides.
///
/// When the search reports no optimal move the first legal move is played
/// instead and the ply is marked [`PlySource::Fallback`]. A board that is
/// already terminal yields an empty play-out.
///
/// # Errors
///
/// Propagates search errors; none occur for non-terminal boards.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn play_out(board: &Board) -> Result<Playout, SearchError> {
    let mut current = *board;
    let mut plies = Vec::new();

    while !current.is_terminal() {
        let player = current.active_player();
        let (mv, source) = match best_move(&current)? {
            Some(mv) => (mv, PlySource::Searched),
            None => match current.legal_moves().first() {
                Some(&mv) => {
                    warn!(%mv, %player, "No optimal move found, playing first legal move");
                    (mv, PlySource::Fallback)
                }
                None => break,
            },
        };
        current = current.place(mv);
        plies.push(Ply {
            player,
            mv,
            source,
            board: current,
        });
    }

    let outcome = current.outcome();
    info!(%outcome, plies = plies.len(), "Play-out finished");
    Ok(Playout {
        start: *board,
        plies,
        outcome,
    })
}
