//! Adversarial search over the full game tree.

mod analysis;
mod minimax;
mod playout;
mod threats;

pub use analysis::{Analysis, Candidate, CandidateVerdict, analyze};
pub use minimax::{BEST_SCORE, WORST_SCORE, best_move, minimax_value};
pub use playout::{Ply, PlySource, Playout, play_out};
pub use threats::{opponent_can_win_next, winning_replies};
