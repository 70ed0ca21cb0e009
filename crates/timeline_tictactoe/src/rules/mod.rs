//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`]. Nothing here knows about history
//! or whose turn it is.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, winning_line};

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    /// No line is complete and empty cells remain.
    InProgress,
    /// `player` completed `line`.
    Won {
        /// The winning player.
        player: Player,
        /// The completed triple.
        line: Line,
    },
    /// All nine cells are filled and no line is complete.
    Draw,
}

impl Evaluation {
    /// Returns true once the board accepts no further moves.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Evaluation::InProgress)
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Evaluation::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning triple, if any.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Evaluation::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns the winning triple as board indices, if any.
    pub fn winning_indices(&self) -> Option<[usize; 3]> {
        self.winning_line()
            .map(|line| line.map(Position::to_index))
    }
}

/// Evaluates a board: first complete line in [`LINES`] order, then fullness.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((player, line)) = winning_line(board) {
        return Evaluation::Won { player, line };
    }
    if is_full(board) {
        return Evaluation::Draw;
    }
    Evaluation::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn board_from(marks: &str) -> Board {
        let mut cells = [Cell::Empty; 9];
        for (i, ch) in marks.chars().enumerate() {
            cells[i] = match ch {
                'X' => Cell::Occupied(Player::X),
                'O' => Cell::Occupied(Player::O),
                _ => Cell::Empty,
            };
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_empty_board_in_progress() {
        let eval = evaluate(&Board::new());
        assert_eq!(eval, Evaluation::InProgress);
        assert!(!eval.is_finished());
        assert_eq!(eval.winning_indices(), None);
    }

    #[test]
    fn test_top_row_win_reports_triple() {
        let eval = evaluate(&board_from("XXXOO...."));
        assert_eq!(eval.winner(), Some(Player::X));
        assert_eq!(eval.winning_indices(), Some([0, 1, 2]));
        assert!(eval.is_finished());
    }

    #[test]
    fn test_draw() {
        let eval = evaluate(&board_from("XOXOXXOXO"));
        assert_eq!(eval, Evaluation::Draw);
        assert_eq!(eval.winner(), None);
        assert_eq!(eval.winning_line(), None);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        // X completes the left column on the ninth move.
        let eval = evaluate(&board_from("XOOXXOXOX"));
        assert_eq!(eval.winner(), Some(Player::X));
        assert_eq!(eval.winning_indices(), Some([0, 3, 6]));
    }

    #[test]
    fn test_first_line_in_table_order_wins_ties() {
        // Top row and left column are both complete; rows come first.
        let eval = evaluate(&board_from("XXXXOOXOO"));
        assert_eq!(eval.winning_indices(), Some([0, 1, 2]));

        // Middle row for X and bottom row for O.
        let eval = evaluate(&board_from("...XXXOOO"));
        assert_eq!(eval.winner(), Some(Player::X));
        assert_eq!(eval.winning_indices(), Some([3, 4, 5]));

        // Left column for X and right column for O.
        let eval = evaluate(&board_from("X.OX.OX.O"));
        assert_eq!(eval.winner(), Some(Player::X));
        assert_eq!(eval.winning_indices(), Some([0, 3, 6]));
    }
}
