use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Board,
    Moves,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    pub pane: Pane,
    /// Focused board cell, 0-8.
    pub cell: usize,
    /// Focused move-list row, in display order.
    pub row: usize,
}

impl Default for CursorState {
    fn default() -> Self {
        // Start on the centre square.
        Self {
            pane: Pane::Board,
            cell: 4,
            row: 0,
        }
    }
}

impl UiState for CursorState {}

impl CursorState {
    /// Row clamped to a list of `rows` entries. The list shrinks when a
    /// play truncates history, so the stored row may point past its end.
    pub fn row_within(&self, rows: usize) -> usize {
        self.row.min(rows.saturating_sub(1))
    }
}
