//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the mark shown for this cell, blank when empty.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => " ",
            Cell::Occupied(Player::X) => "X",
            Cell::Occupied(Player::O) => "O",
        }
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    squares: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Cell::Empty; 9],
        }
    }

    /// Builds a board from nine cells in row-major order.
    pub fn from_cells(squares: [Cell; 9]) -> Self {
        Self { squares }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.squares[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    ///
    /// The receiver is left untouched so earlier history snapshots stay intact.
    #[instrument(skip(self))]
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut next = self.clone();
        next.squares[pos.to_index()] = Cell::Occupied(player);
        next
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Returns all cells in row-major order.
    pub fn squares(&self) -> &[Cell; 9] {
        &self.squares
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Player::X);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Cell::Occupied(Player::X));
        assert_eq!(next.occupied_count(), 1);
    }

    #[test]
    fn test_cell_symbols() {
        assert_eq!(Cell::Empty.symbol(), " ");
        assert_eq!(Cell::Occupied(Player::X).symbol(), "X");
        assert_eq!(Cell::Occupied(Player::O).symbol(), "O");
    }

    #[test]
    fn test_player_display() {
        assert_eq!(Player::X.to_string(), "X");
        assert_eq!(Player::O.to_string(), "O");
    }

    #[test]
    fn test_cell_player() {
        assert_eq!(Cell::Empty.player(), None);
        assert_eq!(Cell::Occupied(Player::O).player(), Some(Player::O));
    }
}
