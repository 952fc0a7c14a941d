use std::fmt;

/// Player in the game. `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Player to move at the given history position.
    ///
    /// X moves on even positions, O on odd ones.
    pub fn for_position(position: usize) -> Self {
        if position % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// One square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Text shown for the cell; empty cells render as nothing.
    pub fn glyph(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::Occupied(player) => player.glyph(),
        }
    }
}
