//! Turn parity invariant: X moves on even steps, O on odd ones.

use super::super::GameState;
use super::Invariant;

/// Invariant: `x_is_next == (current_step % 2 == 0)`.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        state.x_is_next() == (state.current_step() % 2 == 0)
    }

    fn description() -> &'static str {
        "X is next exactly on even steps"
    }
}
