//! Shared test helpers.

#![allow(dead_code, unused_imports)]

use tictactoe::game::{Board, Cell, Player};
use tictactoe::ui::app::App;
use tictactoe::ui::game::{GameIntent, GameReducer, GameState};
use tictactoe::ui::mvi::Reducer;

/// Plays `indices` in order from a fresh game.
pub fn play_all(indices: &[usize]) -> GameState {
    play_from(GameState::default(), indices)
}

pub fn play_from(state: GameState, indices: &[usize]) -> GameState {
    indices.iter().fold(state, |state, &index| {
        GameReducer::reduce(state, GameIntent::Play { index })
    })
}

pub fn reduce(state: GameState, intent: GameIntent) -> GameState {
    GameReducer::reduce(state, intent)
}

/// Board with X on `x` and O on `o`.
pub fn board_with(x: &[usize], o: &[usize]) -> Board {
    let mut cells = [Cell::Empty; 9];
    for &i in x {
        cells[i] = Cell::Occupied(Player::X);
    }
    for &i in o {
        cells[i] = Cell::Occupied(Player::O);
    }
    Board::from_cells(cells)
}

/// App sized like a standard 80x24 terminal.
pub fn app_with(state: GameState) -> App {
    app_sized(state, 80, 24)
}

pub fn app_sized(state: GameState, cols: u16, rows: u16) -> App {
    let mut app = App::with_game(state);
    app.on_resize(cols, rows);
    app
}

/// A full game ending in a draw: ten history entries.
pub const DRAWN_GAME: [usize; 9] = [0, 2, 1, 3, 5, 4, 6, 7, 8];
