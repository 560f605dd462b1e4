//! Visual themes: which symbols stand for each mark.

use crate::games::tictactoe::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Presentation variant of the game.
///
/// Themes only change symbols and decoration. Gameplay is identical.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Plain X and O.
    #[default]
    Classic,
    /// Emoji marks and confetti for the winner.
    Party,
}

impl Theme {
    /// Symbol drawn for `mark`.
    pub fn symbol(self, mark: Mark) -> &'static str {
        match (self, mark) {
            (Theme::Classic, Mark::X) => "X",
            (Theme::Classic, Mark::O) => "O",
            (Theme::Party, Mark::X) => "🦄",
            (Theme::Party, Mark::O) => "🍩",
        }
    }

    /// Whether a win triggers the confetti celebration.
    pub fn celebrates(self) -> bool {
        matches!(self, Theme::Party)
    }

    /// Switches to the other theme.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Theme::Classic => Theme::Party,
            Theme::Party => Theme::Classic,
        }
    }
}
