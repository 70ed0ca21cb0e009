//! Stateless projections of a [`GameState`] for rendering.
//!
//! Nothing here mutates state. A host draws [`CellView`]s and
//! [`MoveListItem`]s however it likes and routes activations back to
//! [`GameState`].

use super::rules::Line;
use super::{Board, Cell, GameState, Position};
use tracing::instrument;

/// One cell as it should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Where the cell sits.
    pub position: Position,
    /// What the cell holds.
    pub cell: Cell,
    /// Whether the cell is part of the winning line.
    pub winning: bool,
}

impl CellView {
    /// Mark to draw, blank when empty.
    pub fn symbol(&self) -> &'static str {
        self.cell.symbol()
    }

    /// Board index of this cell.
    pub fn index(&self) -> usize {
        self.position.to_index()
    }
}

/// Pure projection of a board and an optional winning line.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    winning_line: Option<Line>,
}

impl<'a> BoardView<'a> {
    /// Creates a view over `board`, highlighting `winning_line` if given.
    pub fn new(board: &'a Board, winning_line: Option<Line>) -> Self {
        Self {
            board,
            winning_line,
        }
    }

    /// All nine cells in row-major order.
    pub fn cells(&self) -> [CellView; 9] {
        Position::ALL.map(|position| CellView {
            position,
            cell: self.board.get(position),
            winning: self
                .winning_line
                .is_some_and(|line| line.contains(&position)),
        })
    }

    /// Cells grouped into three rows of three.
    pub fn rows(&self) -> [[CellView; 3]; 3] {
        let cells = self.cells();
        [0, 1, 2].map(|row| [cells[row * 3], cells[row * 3 + 1], cells[row * 3 + 2]])
    }

    /// Forwards a cell activation to `on_activate` without interpreting it.
    #[instrument(skip(self, on_activate))]
    pub fn activate<R>(&self, index: usize, on_activate: impl FnOnce(usize) -> R) -> R {
        on_activate(index)
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveListItem {
    /// History index this item jumps to.
    pub step: usize,
    /// Button text.
    pub label: String,
    /// Whether this is the viewed step.
    pub is_current: bool,
}

impl GameState {
    /// Projects the viewed board with its winning line.
    pub fn board_view(&self) -> BoardView<'_> {
        BoardView::new(self.current_board(), self.evaluation().winning_line())
    }

    /// One item per history entry, in display order.
    pub fn move_list(&self) -> Vec<MoveListItem> {
        let items = self
            .history()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveListItem {
                step,
                label: entry.label(step),
                is_current: step == self.current_step(),
            });
        if self.is_ascending() {
            items.collect()
        } else {
            items.rev().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_cells_follow_board_in_row_major_order() {
        let board = Board::new().with_mark(Position::MiddleRight, Player::O);
        let view = BoardView::new(&board, None);
        let cells = view.cells();
        assert_eq!(cells[5].cell, Cell::Occupied(Player::O));
        assert_eq!(cells[5].symbol(), "O");
        assert!(cells.iter().enumerate().all(|(i, c)| c.index() == i));
        assert!(cells.iter().all(|c| !c.winning));
    }

    #[test]
    fn test_winning_cells_are_flagged() {
        let mut state = GameState::new();
        for i in [0, 4, 1, 7, 2] {
            state.apply_move(i);
        }
        let winning: Vec<usize> = state
            .board_view()
            .cells()
            .iter()
            .filter(|c| c.winning)
            .map(CellView::index)
            .collect();
        assert_eq!(winning, vec![0, 1, 2]);
    }

    #[test]
    fn test_rows() {
        let board = Board::new();
        let rows = BoardView::new(&board, None).rows();
        assert_eq!(rows[1][2].position, Position::MiddleRight);
        assert_eq!(rows[2][0].position, Position::BottomLeft);
    }

    #[test]
    fn test_activate_only_forwards() {
        let board = Board::new();
        let view = BoardView::new(&board, None);
        let mut seen = Vec::new();
        view.activate(7, |i| seen.push(i));
        assert_eq!(seen, vec![7]);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_activate_drives_state() {
        let mut state = GameState::new();
        let board = state.current_board().clone();
        let outcome = BoardView::new(&board, None).activate(3, |i| state.apply_move(i));
        assert!(outcome.is_applied());
        assert_eq!(state.current_board().get(Position::MiddleLeft), Cell::Occupied(Player::X));
    }

    #[test]
    fn test_move_list_order_and_current_marker() {
        let mut state = GameState::new();
        state.apply_move(0);
        state.apply_move(4);
        state.jump_to_step(1);

        let labels: Vec<String> = state.move_list().into_iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            vec![
                "Move to step 0, location (clear board)",
                "Move to step 1, location (0,0)",
                "Move to step 2, location (1,1)",
            ]
        );

        state.toggle_order();
        let list = state.move_list();
        assert_eq!(list.iter().map(|m| m.step).collect::<Vec<_>>(), vec![2, 1, 0]);
        assert_eq!(list.iter().filter(|m| m.is_current).count(), 1);
        assert!(list[1].is_current);
    }
}
