use crate::ui::cursor::state::Pane;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorIntent {
    /// Tab: move focus to the other pane.
    SwitchPane,
    /// Give focus to `pane` without moving either cursor.
    FocusPane { pane: Pane },
    /// Put the board cursor on a cell (mouse click on the board).
    FocusCell { index: usize },
    /// Put the move-list cursor on a display row (mouse click on the list).
    FocusRow { row: usize },
    Left,
    Right,
    /// `rows` is the number of rows currently shown in the move list.
    Up { rows: usize },
    /// See [`CursorIntent::Up`].
    Down { rows: usize },
}

impl Intent for CursorIntent {}
