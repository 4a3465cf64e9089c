//! Error types for the rules model and the search engine.

use crate::rules::{Move, Outcome};
use derive_more::{Display, Error};
use tracing::instrument;

/// Reasons a rules operation can fail.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RulesErrorKind {
    /// The target square of the move is already occupied.
    #[display("Square {} is already occupied", _0)]
    InvalidMove(Move),

    /// A coordinate lies outside the 3x3 grid.
    #[display("Coordinate ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: u8,
        /// Requested column.
        col: u8,
    },

    /// A board could not be constructed from external input.
    #[display("Invalid position: {}", _0)]
    InvalidPosition(String),
}

/// Rules error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Rules error: {} at {}:{}", kind, file, line)]
pub struct RulesError {
    /// What went wrong.
    pub kind: RulesErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RulesError {
    /// Creates a new rules error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: RulesErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &RulesErrorKind {
        &self.kind
    }
}

/// Reasons a search can fail.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SearchErrorKind {
    /// The search was asked for a move on a finished game.
    #[display("Cannot search a terminal position ({})", _0)]
    PreconditionViolation(Outcome),
}

/// Search error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Search error: {} at {}:{}", kind, file, line)]
pub struct SearchError {
    /// What went wrong.
    pub kind: SearchErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SearchError {
    /// Creates a new search error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: SearchErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &SearchErrorKind {
        &self.kind
    }
}
