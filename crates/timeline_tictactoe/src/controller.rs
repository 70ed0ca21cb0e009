//! Game state with time-travel navigation.
//!
//! [`GameState`] owns the full move history and a pointer to the step being
//! viewed. Moves are always played against the viewed board; playing from a
//! rewound step discards the entries after it.

use super::history::HistoryEntry;
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{Evaluation, evaluate};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// What [`GameState::apply_move`] did with a cell activation.
///
/// Every variant except `Applied` is a silent no-op; callers may ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveOutcome {
    /// The mark was placed and a new history entry appended.
    #[display("{player} played {position}")]
    Applied {
        /// Where the mark went.
        position: Position,
        /// Who placed it.
        player: Player,
    },
    /// The viewed board already has a winner or is a draw.
    #[display("Game is already over")]
    GameOver,
    /// The cell already holds a mark.
    #[display("{_0} is already occupied")]
    Occupied(Position),
    /// The index is not a board cell.
    #[display("Cell {_0} is off the board")]
    OutOfBounds(usize),
}

impl MoveOutcome {
    /// Returns true when the state changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// What [`GameState::jump_to_step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpOutcome {
    /// The view now shows the requested step.
    #[display("Viewing step {_0}")]
    Jumped(usize),
    /// The step does not exist; nothing changed.
    #[display("Step {_0} is not in the history")]
    OutOfRange(usize),
}

/// Status line for the viewed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// Game continues with this player to move.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
    /// This player completed a line.
    #[display("{_0} won!")]
    Winner(Player),
    /// Board full with no line.
    #[display("-!- Draw -!-")]
    Draw,
}

/// Complete game session state.
///
/// Deserialization goes through [`GameStateSnapshot`] and rejects any state
/// that breaks [`GameInvariants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateSnapshot")]
pub struct GameState {
    /// Every board reached, entry 0 is the clear board.
    pub(crate) history: Vec<HistoryEntry>,
    /// Index of the viewed entry.
    pub(crate) current_step: usize,
    /// Turn indicator for the viewed board.
    pub(crate) x_is_next: bool,
    /// Move-list display direction. Cosmetic only.
    pub(crate) ascending: bool,
}

impl GameState {
    /// Creates a new session with only the clear board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::clear_board()],
            current_step: 0,
            x_is_next: true,
            ascending: true,
        }
    }

    /// Every history entry, including any not-yet-discarded future.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the viewed entry.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Whether X moves next on the viewed board.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// Whether the move list is shown oldest first.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// The board at the viewed step.
    pub fn current_board(&self) -> &Board {
        self.history[self.current_step].board()
    }

    /// The player who would place the next mark.
    pub fn current_player(&self) -> Player {
        if self.x_is_next { Player::X } else { Player::O }
    }

    /// Evaluates the viewed board.
    pub fn evaluation(&self) -> Evaluation {
        evaluate(self.current_board())
    }

    /// Status line for the viewed board.
    pub fn status(&self) -> Status {
        match self.evaluation() {
            Evaluation::Won { player, .. } => Status::Winner(player),
            Evaluation::Draw => Status::Draw,
            Evaluation::InProgress => Status::NextPlayer(self.current_player()),
        }
    }

    /// Plays the current player's mark at `index` on the viewed board.
    ///
    /// Ignored when the viewed board is finished or the cell is taken.
    /// Otherwise history after the viewed step is discarded, the new board is
    /// appended, the view advances to it and the turn flips.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.current_player()))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        let Some(position) = Position::from_index(index) else {
            debug!(index, "Ignoring move off the board");
            return MoveOutcome::OutOfBounds(index);
        };

        let board = self.current_board();
        if evaluate(board).is_finished() {
            debug!(%position, "Ignoring move on finished board");
            return MoveOutcome::GameOver;
        }
        if !board.is_empty(position) {
            debug!(%position, "Ignoring move on occupied cell");
            return MoveOutcome::Occupied(position);
        }

        let player = self.current_player();
        let next = board.with_mark(position, player);

        let discarded = self.history.len() - (self.current_step + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding alternate future");
        }
        self.history.truncate(self.current_step + 1);
        self.history
            .push(HistoryEntry::after_move(next, position.location()));
        self.current_step += 1;
        self.x_is_next = !self.x_is_next;

        debug!(%position, step = self.current_step, "Move applied");
        self.debug_check_invariants();
        MoveOutcome::Applied { position, player }
    }

    /// Views the board at `step` without touching history.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to_step(&mut self, step: usize) -> JumpOutcome {
        if step >= self.history.len() {
            debug!(len = self.history.len(), "Ignoring jump past end of history");
            return JumpOutcome::OutOfRange(step);
        }

        self.current_step = step;
        self.x_is_next = step % 2 == 0;

        debug!("Jumped");
        self.debug_check_invariants();
        JumpOutcome::Jumped(step)
    }

    /// Reverses the move-list display order.
    #[instrument(skip(self), fields(ascending = self.ascending))]
    pub fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
        debug!(ascending = self.ascending, "Move list order toggled");
    }

    fn debug_check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        if let Err(violations) = GameInvariants::check_all(self) {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "invariants violated: {violations:?}");
        }
    }
}

/// Unchecked field mirror of [`GameState`] used while deserializing.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GameStateSnapshot {
    history: Vec<HistoryEntry>,
    current_step: usize,
    x_is_next: bool,
    ascending: bool,
}

/// A deserialized state that breaks one or more invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Rejected game state: {}", descriptions.join("; "))]
pub struct InvalidSnapshot {
    /// Descriptions of every violated invariant.
    #[error(not(source))]
    pub descriptions: Vec<String>,
}

impl TryFrom<GameStateSnapshot> for GameState {
    type Error = InvalidSnapshot;

    fn try_from(snapshot: GameStateSnapshot) -> Result<Self, Self::Error> {
        let state = Self {
            history: snapshot.history,
            current_step: snapshot.current_step,
            x_is_next: snapshot.x_is_next,
            ascending: snapshot.ascending,
        };
        GameInvariants::check_all(&state).map_err(|violations| {
            warn!(count = violations.len(), "Rejecting invalid game state");
            InvalidSnapshot {
                descriptions: violations.into_iter().map(|v| v.description).collect(),
            }
        })?;
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
