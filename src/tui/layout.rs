//! Screen layout shared by rendering and mouse hit-testing.

use crate::games::tictactoe::Position;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use tracing::instrument;

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 3;
const GAP: u16 = 1;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + GAP * 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + GAP * 2;
const PANEL_WIDTH: u16 = 41;
const PANEL_HEIGHT: u16 = 3 + 3 + BOARD_HEIGHT + 1 + 3 + 1;
const RESTART_WIDTH: u16 = 16;

/// Rects for every element of the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Everything below, centered in the viewport.
    pub panel: Rect,
    /// Title line.
    pub title: Rect,
    /// Row holding the status box.
    pub status: Rect,
    /// The 3x3 grid.
    pub board: Rect,
    /// Cells in row-major order.
    pub cells: [Rect; 9],
    /// Restart button.
    pub restart: Rect,
    /// Key help line.
    pub help: Rect,
}

impl BoardLayout {
    /// Lays the screen out inside `area`. Elements clip when space runs short.
    #[instrument(level = "trace")]
    pub fn compute(area: Rect) -> Self {
        let panel = center_rect(area, PANEL_WIDTH, PANEL_HEIGHT);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Length(3),            // Status
                Constraint::Length(BOARD_HEIGHT), // Board
                Constraint::Length(1),            // Spacer
                Constraint::Length(3),            // Restart
                Constraint::Length(1),            // Help
            ])
            .split(panel);

        let board = center_rect(rows[2], BOARD_WIDTH, BOARD_HEIGHT);
        let cells = Position::ALL.map(|pos| {
            let col = pos.col() as u16;
            let row = pos.row() as u16;
            Rect::new(
                board.x + col * (CELL_WIDTH + GAP),
                board.y + row * (CELL_HEIGHT + GAP),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(board)
        });

        Self {
            panel,
            title: rows[0],
            status: rows[1],
            board,
            cells,
            restart: center_rect(rows[4], RESTART_WIDTH, 3),
            help: rows[5],
        }
    }

    /// Cell under the terminal coordinate, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ratatui::layout::Position::new(column, row);
        Position::ALL
            .into_iter()
            .find(|pos| self.cells[pos.to_index()].contains(point))
    }

    /// Whether the terminal coordinate is on the restart button.
    pub fn hits_restart(&self, column: u16, row: u16) -> bool {
        self.restart
            .contains(ratatui::layout::Position::new(column, row))
    }

    /// Rect for a single cell.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }
}

/// Centers a `width` x `height` rect in `area`, shrinking it to fit.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_centered_in_standard_terminal() {
        let layout = BoardLayout::compute(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.panel, Rect::new(19, 1, 41, 22));
        assert_eq!(layout.cell(Position::TopLeft), Rect::new(25, 7, 9, 3));
        assert_eq!(layout.cell(Position::Center), Rect::new(35, 11, 9, 3));
        assert_eq!(layout.restart, Rect::new(31, 19, 16, 3));
    }

    #[test]
    fn test_hit_testing() {
        let layout = BoardLayout::compute(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.cell_at(25, 7), Some(Position::TopLeft));
        assert_eq!(layout.cell_at(53, 17), Some(Position::BottomRight));
        // Gap between cells.
        assert_eq!(layout.cell_at(34, 7), None);
        assert!(layout.hits_restart(35, 20));
        assert!(!layout.hits_restart(0, 0));
    }

    #[test]
    fn test_tiny_area_does_not_overflow() {
        let area = Rect::new(0, 0, 10, 5);
        let layout = BoardLayout::compute(area);
        assert!(area.contains(ratatui::layout::Position::new(layout.panel.x, layout.panel.y)));
        for cell in layout.cells {
            assert!(cell.is_empty() || (cell.right() <= area.right() && cell.bottom() <= area.bottom()));
        }
    }
}
