//! Tic-tac-toe with move history and time travel.
//!
//! [`GameState`] is the whole game: it records every board reached, lets the
//! caller view any earlier step, and plays new moves from the viewed step,
//! discarding the future that was rewound past. [`BoardView`] and
//! [`GameState::move_list`] are pure projections for whatever host draws the
//! game.
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{GameState, Status, Player};
//!
//! let mut game = GameState::new();
//! for cell in [0, 4, 1, 7, 2] {
//!     game.apply_move(cell);
//! }
//! assert_eq!(game.status(), Status::Winner(Player::X));
//!
//! game.jump_to_step(1);
//! game.apply_move(8);
//! assert_eq!(game.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use controller::{GameState, InvalidSnapshot, JumpOutcome, MoveOutcome, Status};
pub use history::HistoryEntry;
pub use position::{Location, Position};
pub use rules::{Evaluation, Line, evaluate};
pub use types::{Board, Cell, Player};
pub use view::{BoardView, CellView, MoveListItem};
