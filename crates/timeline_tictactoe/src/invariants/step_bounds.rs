//! Step bounds invariant: the viewed step exists and history starts clear.

use super::super::GameState;
use super::Invariant;

/// Invariant: history is non-empty, starts with the clear board, and the
/// current step indexes into it.
pub struct StepBoundsInvariant;

impl Invariant<GameState> for StepBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        let Some(first) = state.history().first() else {
            return false;
        };
        first.location().is_none()
            && first.board().occupied_count() == 0
            && state.current_step() < state.history().len()
    }

    fn description() -> &'static str {
        "Current step lies within a history that starts from the clear board"
    }
}
