//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// Three positions forming a row, column or diagonal.
pub type Line = [Position; 3];

/// Every winning triple, checked in this order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line in [`LINES`] held entirely by one player.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        let cell = board.get(a);
        let player = cell.player()?;
        (cell == board.get(b) && cell == board.get(c)).then_some((player, line))
    })
}
