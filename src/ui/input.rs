use crate::ui::app::App;
use crate::ui::cursor::CursorIntent;
use crate::ui::game::GameIntent;
use crate::ui::layout::{board_cells, hit_cell, hit_row, layout_regions, moves_layout};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

/// Key bindings handled by [`handle_key`], as shown in the footer.
pub const KEY_HINTS: &[(&str, &str)] = &[
    ("1-9", "Play"),
    ("Arrows", "Move"),
    ("Tab", "Pane"),
    ("Enter", "Pick"),
    ("S", "Sort"),
    ("Q", "Quit"),
];

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.dispatch(GameIntent::ToggleOrder),
        KeyCode::Char(ch @ '1'..='9') => {
            let index = ch as usize - '1' as usize;
            app.focus(CursorIntent::FocusCell { index });
            if let Some(intent) = app.board_view().binding(index).and_then(|b| b.on_click) {
                app.dispatch(intent);
            }
        }
        KeyCode::Tab | KeyCode::BackTab => app.focus(CursorIntent::SwitchPane),
        KeyCode::Left => app.focus(CursorIntent::Left),
        KeyCode::Right => app.focus(CursorIntent::Right),
        KeyCode::Up => {
            let rows = app.move_rows();
            app.focus(CursorIntent::Up { rows });
        }
        KeyCode::Down => {
            let rows = app.move_rows();
            app.focus(CursorIntent::Down { rows });
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused(),
        _ => {}
    }
}

/// Left clicks resolve against the same layout the last frame was drawn
/// with; anything else is ignored.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let (column, row) = (mouse.column, mouse.row);
    let regions = layout_regions(app.area());

    if let Some(index) = hit_cell(&board_cells(regions.board), column, row) {
        app.focus(CursorIntent::FocusCell { index });
        if let Some(intent) = app.board_view().binding(index).and_then(|b| b.on_click) {
            app.dispatch(intent);
        }
        return;
    }

    let moves = moves_layout(regions.moves);
    if moves.toggle.contains(Position::new(column, row)) {
        app.dispatch(GameIntent::ToggleOrder);
        return;
    }
    if let Some(line) = hit_row(moves.rows, column, row) {
        let view = app.moves_view();
        let list_row = line + view.scroll;
        let Some(entry) = view.entry(list_row) else {
            return;
        };
        app.focus(CursorIntent::FocusRow { row: list_row });
        if let Some(intent) = entry.on_click {
            app.dispatch(intent);
        }
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
