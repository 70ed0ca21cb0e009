//! Immutable board snapshots that make up a game's history.

use super::{Board, Location};
use serde::{Deserialize, Serialize};

/// A board snapshot and the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    /// `None` only for the initial empty board.
    location: Option<Location>,
}

impl HistoryEntry {
    /// The entry every history starts with.
    pub fn clear_board() -> Self {
        Self {
            board: Board::new(),
            location: None,
        }
    }

    /// An entry produced by a move at `location`.
    pub fn after_move(board: Board, location: Location) -> Self {
        Self {
            board,
            location: Some(location),
        }
    }

    /// The board at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Where the producing move was played.
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// Move-list label for this entry when it sits at `step`.
    pub fn label(&self, step: usize) -> String {
        match self.location {
            Some(location) => format!("Move to step {step}, location ({location})"),
            None => format!("Move to step {step}, location (clear board)"),
        }
    }
}
