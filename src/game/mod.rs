//! Pure tic-tac-toe domain: cells, boards, move records and the
//! win/draw evaluator. Nothing here knows about the terminal.

mod board;
mod history;
mod player;
pub mod rules;

pub use board::{Board, Coord, CELL_COUNT, SIDE};
pub use history::MoveRecord;
pub use player::{Cell, Player};
pub use rules::{evaluate, Line, Outcome, LINES};
