//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod layout;
mod terminal;
mod ui;

pub use app::App;
pub use input::{Action, action_for_key};
pub use layout::BoardLayout;
pub use ui::draw;

use crate::celebration::Viewport;
use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::Stdout;
use std::time::Instant;
use terminal::TerminalSession;
use tracing::{error, info, instrument};

/// Runs the game until the user quits.
pub fn run_tui(config: AppConfig) -> Result<()> {
    // Log to a file so output doesn't fight the TUI for the screen.
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(theme = %config.theme(), "Starting Tic Tac Toe");

    let mut session = TerminalSession::enter()?;
    let terminal = session.terminal_mut();
    let size = terminal.size()?;
    let mut app = App::new(&config, Viewport::new(size.width, size.height))?;

    let res = run_game(terminal, &mut app, &config);
    drop(session);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Tic Tac Toe exited");
    res
}

/// Draws, dispatches events, and ticks animations at the configured rate.
#[instrument(skip_all)]
fn run_game(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    config: &AppConfig,
) -> Result<()> {
    let tick_rate = config.tick_rate();
    let mut last_tick = Instant::now();

    while !app.should_quit() {
        terminal.draw(|frame| draw(frame, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(width, height) => app.resize(width, height),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
