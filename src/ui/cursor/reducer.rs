use crate::game::{CELL_COUNT, SIDE};
use crate::ui::cursor::intent::CursorIntent;
use crate::ui::cursor::state::{CursorState, Pane};
use crate::ui::mvi::Reducer;

/// Board movement wraps within the row or column; list movement wraps
/// around the list.
pub struct CursorReducer;

impl Reducer for CursorReducer {
    type State = CursorState;
    type Intent = CursorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CursorIntent::SwitchPane => CursorState {
                pane: match state.pane {
                    Pane::Board => Pane::Moves,
                    Pane::Moves => Pane::Board,
                },
                ..state
            },
            CursorIntent::FocusPane { pane } => CursorState { pane, ..state },
            CursorIntent::FocusCell { index } if index < CELL_COUNT => CursorState {
                pane: Pane::Board,
                cell: index,
                ..state
            },
            CursorIntent::FocusCell { .. } => state,
            CursorIntent::FocusRow { row } => CursorState {
                pane: Pane::Moves,
                row,
                ..state
            },
            CursorIntent::Left => match state.pane {
                Pane::Board => CursorState {
                    cell: step_col(state.cell, SIDE - 1),
                    ..state
                },
                Pane::Moves => state,
            },
            CursorIntent::Right => match state.pane {
                Pane::Board => CursorState {
                    cell: step_col(state.cell, 1),
                    ..state
                },
                Pane::Moves => state,
            },
            CursorIntent::Up { rows } => match state.pane {
                Pane::Board => CursorState {
                    cell: (state.cell + CELL_COUNT - SIDE) % CELL_COUNT,
                    ..state
                },
                Pane::Moves => {
                    let row = state.row_within(rows);
                    CursorState {
                        row: if row == 0 {
                            rows.saturating_sub(1)
                        } else {
                            row - 1
                        },
                        ..state
                    }
                }
            },
            CursorIntent::Down { rows } => match state.pane {
                Pane::Board => CursorState {
                    cell: (state.cell + SIDE) % CELL_COUNT,
                    ..state
                },
                Pane::Moves => {
                    let row = state.row_within(rows);
                    CursorState {
                        row: if row + 1 >= rows { 0 } else { row + 1 },
                        ..state
                    }
                }
            },
        }
    }
}

/// Moves `cell` within its row by `delta` columns, wrapping.
fn step_col(cell: usize, delta: usize) -> usize {
    let row = cell / SIDE;
    let col = (cell % SIDE + delta) % SIDE;
    row * SIDE + col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_col_wraps_inside_row() {
        assert_eq!(step_col(2, 1), 0);
        assert_eq!(step_col(3, SIDE - 1), 5);
        assert_eq!(step_col(7, 1), 8);
    }
}
