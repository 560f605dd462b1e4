//! Derived game outcome.

use super::rules::{check_winner, is_full};
use super::{Board, Mark};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
///
/// Always computed from a board snapshot, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has won.
    InProgress {
        /// Mark that places next.
        next: Mark,
    },
    /// A mark completed a line.
    Winner(Mark),
    /// The board filled without a line.
    Draw,
}

impl Outcome {
    /// Evaluates `board` with `next` to move.
    #[instrument(level = "trace")]
    pub fn evaluate(board: &Board, next: Mark) -> Self {
        if let Some(mark) = check_winner(board) {
            Outcome::Winner(mark)
        } else if is_full(board) {
            Outcome::Draw
        } else {
            Outcome::InProgress { next }
        }
    }

    /// True while moves are still accepted.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Outcome::InProgress { .. })
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            _ => None,
        }
    }

    /// Status line shown above the board.
    pub fn status_line(&self, theme: Theme) -> String {
        match self {
            Outcome::Winner(mark) => format!("Winner: {}", theme.symbol(*mark)),
            Outcome::Draw => "It's a draw!".to_string(),
            Outcome::InProgress { next } => format!("Next player: {}", theme.symbol(*next)),
        }
    }
}
