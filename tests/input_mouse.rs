mod common;

use common::{app_sized, app_with, play_all, DRAWN_GAME};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tictactoe::game::{Cell, Player};
use tictactoe::ui::app::App;
use tictactoe::ui::cursor::Pane;
use tictactoe::ui::game::{GameState, MoveOrder};
use tictactoe::ui::input::{handle_key, handle_mouse};

fn click(app: &mut App, column: u16, row: u16) {
    handle_mouse(
        app,
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        },
    );
}

/// Screen position inside board cell `index` on an 80x24 terminal.
fn cell_center(index: usize) -> (u16, u16) {
    let row = (index / 3) as u16;
    let col = (index % 3) as u16;
    (1 + col * 7 + 3, 4 + row * 3 + 1)
}

fn click_cell(app: &mut App, index: usize) {
    let (column, row) = cell_center(index);
    click(app, column, row);
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn clicking_cells_plays_them() {
    let mut app = app_with(GameState::default());
    for index in [0, 4, 1, 5, 2] {
        click_cell(&mut app, index);
    }
    let view = app.board_view();
    assert_eq!(view.status.to_string(), "Winner: X");
    assert_eq!(view.highlighted(), vec![0, 1, 2]);
}

#[test]
fn clicking_occupied_cell_changes_nothing() {
    let mut app = app_with(GameState::default());
    click_cell(&mut app, 4);
    let before = app.game().clone();
    click_cell(&mut app, 4);
    assert_eq!(app.game(), &before);
}

#[test]
fn right_click_is_ignored() {
    let mut app = app_with(GameState::default());
    let (column, row) = cell_center(0);
    handle_mouse(
        &mut app,
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        },
    );
    assert_eq!(app.game(), &GameState::default());
}

#[test]
fn clicking_toggle_flips_order() {
    let mut app = app_with(GameState::default());
    click(&mut app, 30, 4);
    assert_eq!(app.game().order(), MoveOrder::Descending);
}

#[test]
fn clicking_list_entry_jumps() {
    let mut app = app_with(play_all(&[0, 4, 8]));
    // Row 1 of the list (y = 7) is "Go to move #1".
    click(&mut app, 30, 7);
    assert_eq!(app.game().current_position(), 1);
    assert_eq!(app.game().history().len(), 4);
    assert_eq!(app.cursor().pane, Pane::Moves);
    assert_eq!(app.cursor().row, 1);
}

#[test]
fn clicking_list_entry_in_descending_order() {
    let mut app = app_with(play_all(&[0, 4, 8]));
    click(&mut app, 30, 4);
    assert_eq!(app.game().order(), MoveOrder::Descending);
    // Rows now read #3 (current), #2, #1, start; y = 8 is row 2.
    click(&mut app, 30, 8);
    assert_eq!(app.game().current_position(), 1);
    assert_eq!(app.cursor().row, 2);
    // The bottom row is the game start.
    click(&mut app, 30, 9);
    assert_eq!(app.game().current_position(), 0);
    assert_eq!(app.game().history().len(), 4);
    assert_eq!(app.moves_view().current_row(), Some(3));
}

#[test]
fn clicking_scrolled_list_hits_drawn_entry() {
    // Eight list lines for ten entries: rows 2 to 9 are on screen.
    let mut app = app_sized(play_all(&DRAWN_GAME), 80, 18);
    click(&mut app, 30, 6);
    assert_eq!(app.game().current_position(), 2);
    assert_eq!(app.cursor().row, 2);
    // The window stays put, so the bottom line is still the last move.
    click(&mut app, 30, 13);
    assert_eq!(app.game().current_position(), 9);
    assert_eq!(app.cursor().row, 9);
}

#[test]
fn clicking_below_last_entry_does_nothing() {
    let mut app = app_with(play_all(&[0]));
    click(&mut app, 30, 12);
    assert_eq!(app.game().current_position(), 1);
}

#[test]
fn digit_keys_play() {
    let mut app = app_with(GameState::default());
    press(&mut app, KeyCode::Char('5'));
    press(&mut app, KeyCode::Char('1'));
    let board = app.game().current_board();
    assert_eq!(board.get(4), Some(Cell::Occupied(Player::X)));
    assert_eq!(board.get(0), Some(Cell::Occupied(Player::O)));
}

#[test]
fn keyboard_navigation_through_history() {
    let mut app = app_with(play_all(&[0, 4]));
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter); // row 0: "Go to game start"
    assert_eq!(app.game().current_position(), 0);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.game().current_position(), 2);
}

#[test]
fn sort_key_toggles_order() {
    let mut app = app_with(GameState::default());
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.game().order(), MoveOrder::Descending);
    press(&mut app, KeyCode::Char('S'));
    assert_eq!(app.game().order(), MoveOrder::Ascending);
}

#[test]
fn quit_keys() {
    let mut app = app_with(GameState::default());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = app_with(GameState::default());
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
}
