//! Stateless UI rendering.

mod board;
mod moves;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use crate::app::App;

/// Draws the whole screen for `app`.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and info
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe - Timeline")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(30)])
        .split(chunks[1]);

    board::render_board(frame, body[0], app);
    moves::render_info(frame, body[1], app);

    let help = Paragraph::new(
        "1-9/Enter: play  Tab: board/moves  o: change order  r: restart  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_new_game_screen() {
        let app = App::new(&Settings::default());
        let text = render(&app);
        assert!(text.contains("Next player: X"));
        assert!(text.contains("Move to step 0, location (clear board)"));
        assert!(text.contains("change order"));
    }

    #[test]
    fn test_win_screen_lists_every_step() {
        let mut app = App::new(&Settings::default());
        for key in ['1', '5', '2', '8', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        let text = render(&app);
        assert!(text.contains("X won!"));
        assert!(text.contains("Move to step 5, location (2,0)"));
        assert!(text.contains(" X "));
        assert!(text.contains(" O "));
    }

    #[test]
    fn test_descending_order_puts_latest_first() {
        let mut app = App::new(&Settings::default());
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('o'));
        let text = render(&app);
        let latest = text.find("Move to step 1").unwrap();
        let first = text.find("Move to step 0").unwrap();
        assert!(latest < first);
    }

    #[test]
    fn test_center_rect_is_centered() {
        let area = Rect::new(0, 0, 40, 20);
        let inner = center_rect(area, 20, 10);
        assert_eq!(inner, Rect::new(10, 5, 20, 10));
    }
}
