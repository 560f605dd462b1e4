//! Strictly Tic-Tac-Toe - two players, one terminal
//!
//! A 3x3 tic-tac-toe game played with keyboard or mouse in the terminal.
//! The party theme swaps the marks for emoji and throws confetti at the
//! winner.
//!
//! # Architecture
//!
//! - **Games**: board types, win/draw rules, and [`GameBoard`] state
//! - **Celebration**: the confetti particle system and its viewport listener
//! - **Theme**: mark symbols per presentation variant
//! - **Config**: TOML configuration
//! - **TUI**: ratatui rendering and crossterm event handling
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameBoard, Mark, Outcome, Position};
//!
//! let mut game = GameBoard::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter,
//!             Position::MiddleRight, Position::TopRight] {
//!     game.select(pos);
//! }
//! assert_eq!(game.outcome(), Outcome::Winner(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod celebration;
mod cli;
mod config;
mod games;
mod theme;
mod tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Direction, GameBoard, Mark, Outcome, Position, Square, rules,
};

// Crate-level exports - Celebration
pub use celebration::{
    CelebrationEffect, Confetti, ConfettiConfig, Particle, Positioning, Viewport,
};

// Crate-level exports - Theme and configuration
pub use config::{AppConfig, CelebrationConfig, ConfigError};
pub use theme::Theme;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Terminal UI
pub use tui::{Action, App, BoardLayout, action_for_key, draw, run_tui};
