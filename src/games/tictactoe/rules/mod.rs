//! Game rules for tic-tac-toe.
//!
//! Pure functions over board snapshots. Nothing here holds state.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};
