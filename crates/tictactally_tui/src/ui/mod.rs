//! UI rendering using ratatui.

mod board;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactally::{GameView, Mark, Position};

use board::{mark_color, render_board};

/// Draws the main UI and returns where each board cell landed.
pub fn draw(f: &mut Frame, view: &GameView, cursor: Position) -> [Rect; 9] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Tictactally - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let scores = Paragraph::new(Line::from(vec![
        score_span(view, Mark::X),
        Span::raw("    "),
        score_span(view, Mark::O),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Score"));
    f.render_widget(scores, chunks[1]);

    let cells = render_board(f, chunks[2], view, cursor);

    let status = Paragraph::new(view.status_text())
        .style(
            Style::default()
                .fg(mark_color(view.status_mark))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[3]);

    let help = Paragraph::new("1-9 / arrows+Enter / click: move | R: Reset scores | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[4]);

    cells
}

fn score_span(view: &GameView, mark: Mark) -> Span<'static> {
    Span::styled(
        view.scores.label(mark),
        Style::default().fg(mark_color(mark)).add_modifier(Modifier::BOLD),
    )
}
