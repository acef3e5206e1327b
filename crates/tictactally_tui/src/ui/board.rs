//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactally::{GameView, Mark, Position, Square};

const WIN_BG: Color = Color::Rgb(0xd4, 0xed, 0xda);
const DRAW_BG: Color = Color::Rgb(0xe0, 0xe0, 0xe0);

/// Foreground colour for a mark.
pub fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    }
}

/// Renders the board and returns the area each cell occupies.
pub fn render_board(f: &mut Frame, area: Rect, view: &GameView, cursor: Position) -> [Rect; 9] {
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let start = row * 3;
        cells[start..start + 3].copy_from_slice(&render_row(f, row_area, view, cursor, start));
    }
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);
    cells
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    view: &GameView,
    cursor: Position,
    start: usize,
) -> [Rect; 3] {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
    let squares = [cols[0], cols[2], cols[4]];
    for (offset, square_area) in squares.iter().enumerate() {
        if let Some(pos) = Position::from_index(start + offset) {
            render_square(f, *square_area, view, cursor, pos);
        }
    }
    squares
}

fn render_square(f: &mut Frame, area: Rect, view: &GameView, cursor: Position, pos: Position) {
    let (text, mut style) = match view.square(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(mark) => (
            mark.to_string(),
            Style::default().fg(mark_color(mark)).add_modifier(Modifier::BOLD),
        ),
    };

    if view.is_winning_cell(pos) {
        style = style.bg(WIN_BG);
    } else if view.draw_highlight {
        style = style.bg(DRAW_BG);
    }

    let border = if pos == cursor { Color::Yellow } else { Color::Black };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
