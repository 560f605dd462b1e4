//! Tic-tac-toe: board types, rules, and the interactive game state.

mod game;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use game::GameBoard;
pub use outcome::Outcome;
pub use position::{Direction, Position};
pub use types::{Board, BoardParseError, Mark, Square};
