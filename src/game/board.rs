use std::fmt;

use crate::game::player::{Cell, Player};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Cells per row (and rows per board).
pub const SIDE: usize = 3;

/// Row/column of a cell, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Coordinate of a row-major board index.
    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / SIDE,
            col: index % SIDE,
        }
    }

    pub fn index(self) -> usize {
        self.row * SIDE + self.col
    }
}

/// Displays the coordinate one-based, the way players count squares.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}

/// Full 3x3 grid, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a board from its cells; used mostly by tests and fixtures.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Cell at `index`, or `None` when the index is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_vacant(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Returns a copy of the board with `player`'s mark at `index`.
    ///
    /// The receiver is left untouched. Returns `None` if the index is off
    /// the board or the cell is already taken.
    pub fn with_mark(&self, index: usize, player: Player) -> Option<Board> {
        if !self.is_vacant(index) {
            return None;
        }
        let mut next = *self;
        next.cells[index] = Cell::Occupied(player);
        Some(next)
    }

    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_is_row_major() {
        assert_eq!(Coord::from_index(0), Coord { row: 0, col: 0 });
        assert_eq!(Coord::from_index(5), Coord { row: 1, col: 2 });
        assert_eq!(Coord::from_index(7).index(), 7);
    }

    #[test]
    fn coord_displays_one_based() {
        assert_eq!(Coord::from_index(5).to_string(), "(2, 3)");
        assert_eq!(Coord::from_index(0).to_string(), "(1, 1)");
    }

    #[test]
    fn with_mark_leaves_original_untouched() {
        let board = Board::empty();
        let next = board.with_mark(4, Player::X).unwrap();
        assert_eq!(board.get(4), Some(Cell::Empty));
        assert_eq!(next.get(4), Some(Cell::Occupied(Player::X)));
        assert_eq!(next.mark_count(), 1);
    }

    #[test]
    fn with_mark_rejects_taken_and_out_of_range() {
        let board = Board::empty().with_mark(0, Player::X).unwrap();
        assert!(board.with_mark(0, Player::O).is_none());
        assert!(board.with_mark(CELL_COUNT, Player::O).is_none());
    }
}
