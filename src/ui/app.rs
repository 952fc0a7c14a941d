use crate::config::Config;
use crate::ui::board::BoardView;
use crate::ui::cursor::{CursorIntent, CursorReducer, CursorState, Pane};
use crate::ui::game::{GameIntent, GameReducer, GameState};
use crate::ui::layout::{layout_regions, moves_layout, scroll_offset};
use crate::ui::moves::MoveListView;
use crate::ui::mvi::Reducer;
use ratatui::layout::Rect;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Terminal area, kept for mouse hit-testing.
    area: Rect,
    /// Game controller state (MVI pattern).
    game: GameState,
    /// Keyboard focus (MVI pattern).
    cursor: CursorState,
    /// First move-list row on screen.
    moves_scroll: usize,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::with_game(GameState::with_order(config.moves.order))
    }

    pub fn with_game(game: GameState) -> Self {
        Self {
            should_quit: false,
            area: Rect::default(),
            game,
            cursor: CursorState::default(),
            moves_scroll: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.area = Rect::new(0, 0, cols, rows);
        self.follow_scroll();
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    pub fn board_view(&self) -> BoardView {
        BoardView::from_state(&self.game)
    }

    pub fn moves_view(&self) -> MoveListView {
        MoveListView::from_state(&self.game).with_scroll(self.moves_scroll)
    }

    /// Applies a game intent. Intents the reducer rejects leave the state
    /// untouched and are only logged.
    pub fn dispatch(&mut self, intent: GameIntent) {
        let before = self.game.clone();
        dispatch_mvi!(self, game, GameReducer, intent);
        self.follow_scroll();

        if self.game == before {
            tracing::debug!(?intent, "intent ignored");
            return;
        }
        tracing::debug!(
            ?intent,
            position = self.game.current_position(),
            history_len = self.game.history().len(),
            "intent applied"
        );
        if matches!(intent, GameIntent::Play { .. }) {
            let outcome = self.game.outcome();
            if outcome.is_decided() {
                tracing::info!(?outcome, "game decided");
            }
        }
    }

    pub fn focus(&mut self, intent: CursorIntent) {
        dispatch_mvi!(self, cursor, CursorReducer, intent);
        self.follow_scroll();
    }

    /// Number of rows in the move list, for wrapping the list cursor.
    pub fn move_rows(&self) -> usize {
        self.game.history().len()
    }

    /// Enter / Space: activate whatever the keyboard cursor points at.
    pub fn activate_focused(&mut self) {
        let intent = match self.cursor.pane {
            Pane::Board => self
                .board_view()
                .binding(self.cursor.cell)
                .and_then(|binding| binding.on_click),
            Pane::Moves => self
                .moves_view()
                .entry(self.cursor.row_within(self.move_rows()))
                .and_then(|entry| entry.on_click),
        };
        if let Some(intent) = intent {
            self.dispatch(intent);
        }
    }

    /// Focused board cell, when the board pane has focus.
    pub fn board_cursor(&self) -> Option<usize> {
        (self.cursor.pane == Pane::Board).then_some(self.cursor.cell)
    }

    /// Focused move-list row, when the moves pane has focus.
    pub fn moves_cursor(&self) -> Option<usize> {
        (self.cursor.pane == Pane::Moves).then(|| self.cursor.row_within(self.move_rows()))
    }

    /// Scrolls the move list so the focused row, or the current entry while
    /// the board has focus, fits in the lines the last layout left for it.
    fn follow_scroll(&mut self) {
        let rows = moves_layout(layout_regions(self.area).moves).rows;
        let anchor = match self.moves_cursor() {
            Some(row) => row,
            None => MoveListView::from_state(&self.game)
                .current_row()
                .unwrap_or(0),
        };
        self.moves_scroll = scroll_offset(
            self.moves_scroll,
            anchor,
            usize::from(rows.height),
            self.move_rows(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activate_on_board_plays_focused_cell() {
        let mut app = App::with_game(GameState::default());
        app.activate_focused();
        assert_eq!(app.game().history().len(), 2);
        assert_eq!(app.game().history()[1].coord.map(|c| c.index()), Some(4));
    }

    #[test]
    fn list_scroll_moves_only_when_needed() {
        let mut app = App::with_game(GameState::default());
        for index in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
            app.dispatch(GameIntent::Play { index });
        }
        // 18 rows leave eight list lines for ten entries.
        app.on_resize(80, 18);
        assert_eq!(app.moves_view().scroll, 2);

        // Focusing a visible row keeps the window where it is.
        app.focus(CursorIntent::FocusRow { row: 4 });
        assert_eq!(app.moves_view().scroll, 2);
        app.focus(CursorIntent::FocusRow { row: 0 });
        assert_eq!(app.moves_view().scroll, 0);

        // A taller terminal shows everything.
        app.on_resize(80, 24);
        assert_eq!(app.moves_view().scroll, 0);
    }

    #[test]
    fn activate_on_current_entry_does_nothing() {
        let mut app = App::with_game(GameState::default());
        app.focus(CursorIntent::FocusPane { pane: Pane::Moves });
        app.activate_focused();
        assert_eq!(app.game(), &GameState::default());
    }
}
