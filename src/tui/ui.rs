//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use super::layout::{BoardLayout, center_rect};
use crate::games::tictactoe::{Mark, Position, Square, rules::winning_line};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

const HELP: &str = "arrows move · 1-9/enter place · r restart · t theme · q quit";

/// Renders the whole screen, confetti last so it falls over everything.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = BoardLayout::compute(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    draw_status(frame, &layout, app);
    draw_board(frame, &layout, app);

    let restart = Paragraph::new("Restart Game")
        .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(restart, layout.restart);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    if let Some(celebration) = app.celebration()
        && let Some(confetti) = celebration.confetti()
    {
        let area = celebration.field().intersection(frame.area());
        frame.render_widget(confetti, area);
    }
}

fn draw_status(frame: &mut Frame, layout: &BoardLayout, app: &App) {
    let outcome = app.game().outcome();
    let status = outcome.status_line(app.theme());
    let style = if outcome.winner().is_some() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let width = u16::try_from(status.width() + 4).unwrap_or(u16::MAX);
    let area = center_rect(layout.status, width, 3);
    let paragraph = Paragraph::new(status)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_board(frame: &mut Frame, layout: &BoardLayout, app: &App) {
    let board = app.game().board();
    let winning = winning_line(board).map(|(_, line)| line);

    for pos in Position::ALL {
        let in_line = winning.is_some_and(|line| line.contains(&pos));

        let (symbol, mark_style) = match board.get(pos) {
            Square::Empty => ("", Style::default()),
            Square::Occupied(mark) => (app.theme().symbol(mark), style_for(mark)),
        };
        let mark_style = if in_line {
            mark_style.fg(Color::Green)
        } else {
            mark_style
        };

        let border_style = if pos == app.cursor() {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if in_line {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let cell = Paragraph::new(Line::from(Span::styled(symbol, mark_style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        frame.render_widget(cell, layout.cell(pos));
    }
}

fn style_for(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
