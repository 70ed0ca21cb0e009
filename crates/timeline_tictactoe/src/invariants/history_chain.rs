//! History chain invariant: each entry is its predecessor plus one move.

use super::super::rules::evaluate;
use super::super::{GameState, Player, Position};
use super::Invariant;

/// Invariant: entry `n` has exactly `n` marks and differs from entry `n - 1`
/// by a single mark, placed by X on odd steps and O on even ones, at the
/// recorded location, on a board that was not already finished.
pub struct HistoryChainInvariant;

impl Invariant<GameState> for HistoryChainInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        history
            .iter()
            .enumerate()
            .all(|(step, entry)| entry.board().occupied_count() == step)
            && history.windows(2).enumerate().all(|(i, pair)| {
                let (before, after) = (&pair[0], &pair[1]);
                let mover = if i % 2 == 0 { Player::X } else { Player::O };
                let Some(position) = after.location().and_then(Position::from_location) else {
                    return false;
                };
                !evaluate(before.board()).is_finished()
                    && before.board().is_empty(position)
                    && before.board().with_mark(position, mover) == *after.board()
            })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one alternating mark to an unfinished board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HistoryEntry;

    #[test]
    fn test_played_game_holds() {
        let mut state = GameState::new();
        for i in [0, 4, 1, 7, 2] {
            state.apply_move(i);
            assert!(HistoryChainInvariant::holds(&state));
        }
    }

    #[test]
    fn test_wrong_mover_violates() {
        let mut state = GameState::new();
        let pos = Position::Center;
        let board = state.current_board().with_mark(pos, Player::O);
        state.history.push(HistoryEntry::after_move(board, pos.location()));
        assert!(!HistoryChainInvariant::holds(&state));
    }

    #[test]
    fn test_mismatched_location_violates() {
        let mut state = GameState::new();
        let board = state.current_board().with_mark(Position::Center, Player::X);
        state.history.push(HistoryEntry::after_move(board, Position::TopLeft.location()));
        assert!(!HistoryChainInvariant::holds(&state));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut state = GameState::new();
        for i in [0, 4, 1, 7, 2] {
            state.apply_move(i);
        }
        let pos = Position::BottomRight;
        let board = state.current_board().with_mark(pos, Player::O);
        state.history.push(HistoryEntry::after_move(board, pos.location()));
        assert!(!HistoryChainInvariant::holds(&state));
    }
}
