//! Application state and key handling.

use crossterm::event::KeyCode;
use timeline_tictactoe::{BoardView, GameState, Position};
use tracing::{debug, info};

use crate::input::{digit_cell, move_cursor};
use crate::settings::Settings;

/// Which panel receives arrow keys and `Enter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 board.
    Board,
    /// The move list.
    Moves,
}

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep going.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    /// Row of the move list under the selection, in display order.
    selected: usize,
    cell_hints: bool,
    start_ascending: bool,
}

impl App {
    /// Creates a new application from settings.
    pub fn new(settings: &Settings) -> Self {
        let mut app = Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            cell_hints: *settings.cell_hints(),
            start_ascending: *settings.ascending(),
        };
        app.restart();
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected move-list row, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether empty cells show their numbers.
    pub fn cell_hints(&self) -> bool {
        self.cell_hints
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        debug!(?key, focus = ?self.focus, "Handling key");

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('o') => {
                self.game.toggle_order();
                self.sync_selection();
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
            }
            code => {
                if let Some(index) = digit_cell(code) {
                    self.activate_cell(index);
                } else {
                    match self.focus {
                        Focus::Board => self.handle_board_key(code),
                        Focus::Moves => self.handle_moves_key(code),
                    }
                }
            }
        }
        Control::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_cell(self.cursor.to_index()),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        let last = self.game.history().len() - 1;
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = last,
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(item) = self.game.move_list().get(self.selected) {
                    let outcome = self.game.jump_to_step(item.step);
                    debug!(%outcome, "Jump requested from move list");
                }
                self.sync_selection();
            }
            _ => {}
        }
    }

    fn activate_cell(&mut self, index: usize) {
        let board = self.game.current_board().clone();
        let winning_line = self.game.evaluation().winning_line();
        let outcome =
            BoardView::new(&board, winning_line).activate(index, |i| self.game.apply_move(i));
        debug!(%outcome, "Cell activated");
        if let Some(position) = Position::from_index(index) {
            self.cursor = position;
        }
        self.sync_selection();
    }

    /// Points the move-list selection at the viewed step.
    fn sync_selection(&mut self) {
        let step = self.game.current_step();
        self.selected = if self.game.is_ascending() {
            step
        } else {
            self.game.history().len() - 1 - step
        };
    }

    /// Starts a new session.
    pub fn restart(&mut self) {
        info!("Starting new session");
        self.game = GameState::new();
        if !self.start_ascending {
            self.game.toggle_order();
        }
        self.cursor = Position::Center;
        self.sync_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timeline_tictactoe::{Cell, Player, Status};

    fn app() -> App {
        App::new(&Settings::default())
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert_eq!(app.handle_key(*key), Control::Continue);
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(app().handle_key(KeyCode::Char('q')), Control::Quit);
        assert_eq!(app().handle_key(KeyCode::Esc), Control::Quit);
    }

    #[test]
    fn test_cursor_and_enter_place_mark() {
        let mut app = app();
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(
            app.game().current_board().get(Position::TopLeft),
            Cell::Occupied(Player::X)
        );
        assert_eq!(app.game().status(), Status::NextPlayer(Player::O));
    }

    #[test]
    fn test_digits_place_marks_directly() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('1')]);
        assert_eq!(app.game().history().len(), 3);
        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.selected(), 2);
    }

    #[test]
    fn test_move_list_jump_then_branch() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('9')]);
        press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.focus(), Focus::Moves);
        assert_eq!(app.game().current_step(), 1);
        assert_eq!(app.game().history().len(), 4);

        press(&mut app, &[KeyCode::Char('3')]);
        assert_eq!(app.game().history().len(), 3);
        assert_eq!(app.selected(), 2);
    }

    #[test]
    fn test_toggle_order_keeps_selection_on_viewed_step() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);
        press(&mut app, &[KeyCode::Char('o')]);
        assert!(!app.game().is_ascending());
        assert_eq!(app.selected(), 0);
        assert_eq!(app.game().move_list()[app.selected()].step, 2);
    }

    #[test]
    fn test_restart_honours_configured_order() {
        let settings: Settings = toml::from_str("ascending = false").unwrap();
        let mut app = App::new(&settings);
        assert!(!app.game().is_ascending());
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('r')]);
        assert_eq!(app.game().history().len(), 1);
        assert!(!app.game().is_ascending());
    }

    #[test]
    fn test_selection_clamps_to_history() {
        let mut app = app();
        press(&mut app, &[KeyCode::Tab, KeyCode::Down, KeyCode::Down, KeyCode::End]);
        assert_eq!(app.selected(), 0);
        press(&mut app, &[KeyCode::Up]);
        assert_eq!(app.selected(), 0);
    }
}
