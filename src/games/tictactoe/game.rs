//! Interactive game state: the board plus whose turn it is.

use super::{Board, Mark, Outcome, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// State owned by the game board for its whole lifetime.
///
/// Invalid interactions are silent no-ops: [`GameBoard::select`] reports
/// whether the move was taken but never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameBoard {
    board: Board,
    next: Mark,
}

impl GameBoard {
    /// Mark that moves first in every game.
    pub const FIRST_MARK: Mark = Mark::X;

    /// Creates an empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next: Self::FIRST_MARK,
        }
    }

    /// Current board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark that places next.
    pub fn next_mark(&self) -> Mark {
        self.next
    }

    /// Derived outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        Outcome::evaluate(&self.board, self.next)
    }

    /// Places the next mark at `pos`.
    ///
    /// Ignored once the game is decided or when the square is taken.
    /// Returns `true` when the move was accepted.
    #[instrument(skip(self), fields(next = ?self.next))]
    pub fn select(&mut self, pos: Position) -> bool {
        if !self.outcome().is_in_progress() {
            debug!("Game already decided, ignoring selection");
            return false;
        }
        if !self.board.is_empty(pos) {
            debug!("Square occupied, ignoring selection");
            return false;
        }

        self.board = self.board.with_mark(pos, self.next);
        self.next = self.next.opponent();
        debug!(outcome = ?self.outcome(), "Move accepted");
        true
    }

    /// Like [`GameBoard::select`], addressed by board index. Indices past 8 are ignored.
    #[instrument(skip(self))]
    pub fn select_index(&mut self, index: usize) -> bool {
        match Position::from_index(index) {
            Some(pos) => self.select(pos),
            None => {
                debug!("Index out of range, ignoring selection");
                false
            }
        }
    }

    /// Clears the board and hands the move back to X.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        *self = Self::new();
    }
}

impl Default for GameBoard {
    fn default() -> Self {
        Self::new()
    }
}
