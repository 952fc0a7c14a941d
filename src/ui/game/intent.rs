use crate::ui::mvi::Intent;

/// Actions a player can take on the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameIntent {
    /// Place the current player's mark on a board cell (0-8).
    Play { index: usize },
    /// Make an earlier (or later) history position current.
    JumpTo { position: usize },
    /// Flip the move list between ascending and descending.
    ToggleOrder,
}

impl Intent for GameIntent {}
