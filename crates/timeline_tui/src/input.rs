//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use timeline_tictactoe::{Location, Position};

/// Moves the board cursor one cell for an arrow key. Edges do not wrap.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let Location { column, row } = cursor.location();

    let target = match key {
        KeyCode::Left => column.checked_sub(1).map(|column| Location { column, row }),
        KeyCode::Right => Some(Location {
            column: column + 1,
            row,
        }),
        KeyCode::Up => row.checked_sub(1).map(|row| Location { column, row }),
        KeyCode::Down => Some(Location {
            column,
            row: row + 1,
        }),
        _ => None,
    };

    target.and_then(Position::from_location).unwrap_or(cursor)
}

/// Maps digit keys `1`-`9` to board indices 0-8.
pub fn digit_cell(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}
