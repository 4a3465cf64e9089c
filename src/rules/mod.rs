//! Board and rules model for tic-tac-toe.
//!
//! Pure functions over immutable [`Board`] values: whose turn it is, which
//! moves are legal, the position after a move, and whether the game is over.

mod coord;
mod notation;
mod outcome;
mod types;

pub mod draw;
pub mod win;

pub use coord::Move;
pub use outcome::Outcome;
pub use types::{Board, Player, Square};
pub use win::LINES;
