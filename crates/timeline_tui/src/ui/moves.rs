//! Status line, order toggle and move list.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use timeline_tictactoe::Status;

use crate::app::{App, Focus};

/// Renders the info column next to the board.
pub fn render_info(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Order toggle
            Constraint::Length(3), // Status
            Constraint::Min(3),    // Moves
        ])
        .split(area);

    let order = if app.game().is_ascending() {
        "ascending"
    } else {
        "descending"
    };
    let toggle = Paragraph::new(format!("[o] change order ({order})"))
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(toggle, chunks[0]);

    let status = app.game().status();
    let status_style = match status {
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    };
    let status_text = Paragraph::new(status.to_string())
        .style(status_style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[1]);

    render_moves(frame, chunks[2], app);
}

fn render_moves(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Moves;

    let items: Vec<ListItem> = app
        .game()
        .move_list()
        .into_iter()
        .map(|item| {
            let style = if item.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(item.label).style(style)
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Moves"),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(focused.then_some(app.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}
