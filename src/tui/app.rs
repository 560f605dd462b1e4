//! Application state and event handling.

use super::input::{Action, action_for_key};
use super::layout::BoardLayout;
use crate::celebration::{CelebrationEffect, ConfettiConfig, Viewport};
use crate::config::{AppConfig, ConfigError};
use crate::games::tictactoe::{GameBoard, Position};
use crate::theme::Theme;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::watch;
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Owns the game for as long as the screen is up. The celebration is
/// mounted only while the party theme is active.
#[derive(Debug)]
pub struct App {
    game: GameBoard,
    theme: Theme,
    cursor: Position,
    viewport: watch::Sender<Viewport>,
    confetti: ConfettiConfig,
    celebration: Option<CelebrationEffect>,
    should_quit: bool,
}

impl App {
    /// Creates the app for a terminal of the given size.
    #[instrument(skip(config), fields(theme = %config.theme()))]
    pub fn new(config: &AppConfig, viewport: Viewport) -> Result<Self, ConfigError> {
        let (viewport, _) = watch::channel(viewport);
        let mut app = Self {
            game: GameBoard::new(),
            theme: Theme::Classic,
            cursor: Position::Center,
            viewport,
            confetti: config.celebration().to_confetti()?,
            celebration: None,
            should_quit: false,
        };
        app.set_theme(*config.theme());
        Ok(app)
    }

    /// The game state.
    pub fn game(&self) -> &GameBoard {
        &self.game
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Mounted celebration, if the theme has one.
    pub fn celebration(&self) -> Option<&CelebrationEffect> {
        self.celebration.as_ref()
    }

    /// Current viewport size.
    pub fn viewport(&self) -> Viewport {
        *self.viewport.borrow()
    }

    /// Number of live resize listeners.
    pub fn resize_listeners(&self) -> usize {
        self.viewport.receiver_count()
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Layout for the current viewport.
    pub fn layout(&self) -> BoardLayout {
        BoardLayout::compute(self.viewport().area())
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(action) = action_for_key(key) else {
            return;
        };
        debug!(?action, "Key action");
        match action {
            Action::Cursor(direction) => self.cursor = self.cursor.step(direction),
            Action::PlaceAtCursor => self.select(self.cursor),
            Action::Place(pos) => {
                self.cursor = pos;
                self.select(pos);
            }
            Action::Restart => self.restart(),
            Action::ToggleTheme => self.set_theme(self.theme.toggle()),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Handles a mouse event. Only left clicks do anything.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let layout = self.layout();
        if let Some(pos) = layout.cell_at(event.column, event.row) {
            self.cursor = pos;
            self.select(pos);
        } else if layout.hits_restart(event.column, event.row) {
            self.restart();
        }
    }

    /// Publishes a new viewport size to every listener.
    #[instrument(skip(self))]
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport.send_replace(Viewport::new(width, height));
    }

    /// Places the next mark at `pos`. Rejected selections change nothing.
    #[instrument(skip(self))]
    pub fn select(&mut self, pos: Position) {
        if self.game.select(pos) {
            self.sync_celebration();
        }
    }

    /// Resets the game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.game.restart();
        self.sync_celebration();
    }

    /// Switches theme, mounting or unmounting the celebration to match.
    #[instrument(skip(self))]
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        match (theme.celebrates(), self.celebration.is_some()) {
            (true, false) => {
                self.celebration = Some(CelebrationEffect::mount(
                    &self.viewport,
                    self.confetti.clone(),
                ));
                self.sync_celebration();
            }
            (false, true) => self.celebration = None,
            _ => {}
        }
    }

    /// Advances animations one tick.
    #[instrument(level = "trace", skip(self))]
    pub fn tick(&mut self) {
        if let Some(celebration) = self.celebration.as_mut() {
            celebration.tick();
        }
    }

    fn sync_celebration(&mut self) {
        let outcome = self.game.outcome();
        if let Some(celebration) = self.celebration.as_mut() {
            celebration.observe(&outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app(theme: Theme) -> App {
        App::new(&AppConfig::default().with_theme(theme), Viewport::new(80, 24)).unwrap()
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_click_on_cell_selects_it() {
        let mut app = app(Theme::Classic);
        let cell = app.layout().cell(Position::TopRight);
        app.handle_mouse(click(cell.x + 1, cell.y + 1));
        assert!(!app.game().board().is_empty(Position::TopRight));
        assert_eq!(app.cursor(), Position::TopRight);
    }

    #[test]
    fn test_click_on_restart_clears_board() {
        let mut app = app(Theme::Classic);
        app.handle_key(KeyEvent::from(KeyCode::Char('5')));
        let restart = app.layout().restart;
        app.handle_mouse(click(restart.x + 2, restart.y + 1));
        assert_eq!(app.game(), &GameBoard::new());
    }

    #[test]
    fn test_toggle_theme_mounts_and_unmounts_listener() {
        let mut app = app(Theme::Classic);
        assert_eq!(app.resize_listeners(), 0);
        app.handle_key(KeyEvent::from(KeyCode::Char('t')));
        assert_eq!(app.theme(), Theme::Party);
        assert_eq!(app.resize_listeners(), 1);
        app.handle_key(KeyEvent::from(KeyCode::Char('t')));
        assert_eq!(app.resize_listeners(), 0);
        assert!(app.celebration().is_none());
    }

    #[test]
    fn test_ctrl_r_does_not_restart() {
        let mut app = app(Theme::Classic);
        app.handle_key(KeyEvent::from(KeyCode::Char('5')));
        let before = *app.game();
        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(app.game(), &before);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app(Theme::Classic);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_quit_key() {
        let mut app = app(Theme::Classic);
        app.handle_key(KeyEvent::from(KeyCode::Char('q')));
        assert!(app.should_quit());
    }
}
