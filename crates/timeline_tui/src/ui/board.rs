//! Board rendering from a [`BoardView`](timeline_tictactoe::BoardView).

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use timeline_tictactoe::{Cell, CellView, Player};

use super::center_rect;
use crate::app::{App, Focus};

/// Renders the viewed board with winning cells and cursor highlighted.
pub fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let border_style = if app.focus() == Focus::Board {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!("Step {}", app.game().current_step()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 38, 11);
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

    for (i, row) in app.game().board_view().rows().iter().enumerate() {
        draw_row(frame, rows[i * 2], row, app);
        if i < 2 {
            draw_separator(frame, rows[i * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, row: &[CellView; 3], app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (i, cell) in row.iter().enumerate() {
        draw_cell(frame, cols[i * 2], cell, app);
        if i < 2 {
            draw_separator_vertical(frame, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &CellView, app: &App) {
    let (symbol, mut style) = match view.cell {
        Cell::Empty if app.cell_hints() => (
            format!(" {} ", view.index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => (format!(" {} ", view.symbol()), Style::default()),
        Cell::Occupied(Player::X) => (
            format!(" {} ", view.symbol()),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            format!(" {} ", view.symbol()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if view.winning {
        style = style.bg(Color::Green);
    }
    if app.focus() == Focus::Board && view.position == app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Fill the middle line of the 3-line cell.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}
