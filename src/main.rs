//! Strictly Tic-Tac-Toe - command-line entry point.

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use strictly_tictactoe::{AppConfig, Cli, Command, Mark, Theme, run_tui};
use strum::IntoEnumIterator;
use tracing::instrument;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, theme } => play(&config, theme),
        Command::Themes => {
            init_stderr_tracing();
            list_themes();
            Ok(())
        }
        Command::Config { config } => {
            init_stderr_tracing();
            print_config(&config)
        }
    }
}

/// Plain commands log to stderr; the TUI sets up its own file logger.
fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the terminal game
#[instrument]
fn play(config_path: &Path, theme: Option<Theme>) -> Result<()> {
    let mut config = AppConfig::load_or_default(config_path)?;
    if let Some(theme) = theme {
        config = config.with_theme(theme);
    }
    run_tui(config)
}

fn list_themes() {
    for theme in Theme::iter() {
        let marks: Vec<_> = Mark::iter().map(|m| theme.symbol(m)).collect();
        let extra = if theme.celebrates() { "  (confetti)" } else { "" };
        println!("{:<8} {}{}", theme.to_string(), marks.join(" vs "), extra);
    }
}

#[instrument]
fn print_config(config_path: &Path) -> Result<()> {
    let config = AppConfig::load_or_default(config_path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
