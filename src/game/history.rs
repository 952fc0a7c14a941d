use crate::game::board::{Board, Coord};

/// A board snapshot and the cell placed to reach it.
///
/// The opening record has no coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub board: Board,
    pub coord: Option<Coord>,
}

impl MoveRecord {
    pub fn start() -> Self {
        Self {
            board: Board::empty(),
            coord: None,
        }
    }

    pub fn new(board: Board, coord: Coord) -> Self {
        Self {
            board,
            coord: Some(coord),
        }
    }
}

impl Default for MoveRecord {
    fn default() -> Self {
        Self::start()
    }
}
