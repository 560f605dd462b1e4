//! Command-line interface for strictly_tictactoe.

use crate::theme::Theme;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Tic-Tac-Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Path to the configuration file (defaults apply if missing)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// Theme override
        #[arg(short, long, value_enum)]
        theme: Option<Theme>,
    },

    /// List themes and their marks
    Themes,

    /// Print the effective configuration as TOML
    Config {
        /// Path to the configuration file (defaults apply if missing)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,
    },
}
