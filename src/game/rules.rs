//! Win and draw detection.

use crate::game::board::Board;
use crate::game::player::{Cell, Player};

/// One of the eight winning triples of cell indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line(pub [usize; 3]);

impl Line {
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn indices(&self) -> [usize; 3] {
        self.0
    }
}

/// Rows, then columns, then diagonals. The evaluator reports the first
/// match in this order.
pub const LINES: [Line; 8] = [
    Line([0, 1, 2]),
    Line([3, 4, 5]),
    Line([6, 7, 8]),
    Line([0, 3, 6]),
    Line([1, 4, 7]),
    Line([2, 5, 8]),
    Line([0, 4, 8]),
    Line([2, 4, 6]),
];

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Game still running.
    NoResult,
    /// `line` is the first line in [`LINES`] order held by `player`.
    Win {
        player: Player,
        line: Line,
    },
    /// Board full, no line.
    Draw,
}

impl Outcome {
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::NoResult)
    }

    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Evaluates a board.
pub fn evaluate(board: &Board) -> Outcome {
    for line in LINES {
        let [a, b, c] = line.indices();
        if let Some(Cell::Occupied(player)) = board.get(a) {
            if board.get(b) == Some(Cell::Occupied(player))
                && board.get(c) == Some(Cell::Occupied(player))
            {
                return Outcome::Win { player, line };
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::NoResult
    }
}
