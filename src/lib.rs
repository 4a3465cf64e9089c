//! Tic-tac-toe minimax engine.
//!
//! Given a board, the engine reports whose turn it is, the legal moves,
//! whether the game is over and, if not, the move the side to move should
//! play assuming best play from both sides.
//!
//! # Architecture
//!
//! - **Rules**: immutable [`Board`] values with turn, move and outcome logic
//! - **Search**: exhaustive minimax over the full game tree ([`best_move`])
//! - **Config**: TOML settings for the command-line front end
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{best_move, Board, Move};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let board = Board::initial()
//!     .apply(Move::new(0, 0)?)?
//!     .apply(Move::new(1, 1)?)?
//!     .apply(Move::new(0, 1)?)?;
//! assert_eq!(best_move(&board)?, Some(Move::new(0, 2)?));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod rules;
mod search;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig, OutputFormat};

// Crate-level exports - Errors
pub use error::{RulesError, RulesErrorKind, SearchError, SearchErrorKind};

// Crate-level exports - Rules model
pub use rules::{Board, LINES, Move, Outcome, Player, Square};

// Crate-level exports - Search engine
pub use search::{
    Analysis, BEST_SCORE, Candidate, CandidateVerdict, Ply, PlySource, Playout, WORST_SCORE,
    analyze, best_move, minimax_value, opponent_can_win_next, play_out, winning_replies,
};
