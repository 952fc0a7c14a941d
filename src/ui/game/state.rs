use serde::{Deserialize, Serialize};

use crate::game::{evaluate, Board, MoveRecord, Outcome, Player};
use crate::ui::mvi::UiState;

/// Order in which the move list is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    #[default]
    Ascending,
    Descending,
}

impl MoveOrder {
    pub fn toggled(self) -> Self {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MoveOrder::Ascending => "Ascending",
            MoveOrder::Descending => "Descending",
        }
    }
}

/// Authoritative game state: every board reached on the current branch.
///
/// `history` is never empty and `current` always indexes into it.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub(super) history: Vec<MoveRecord>,
    pub(super) current: usize,
    pub(super) order: MoveOrder,
}

impl UiState for GameState {}

impl Default for GameState {
    fn default() -> Self {
        Self::with_order(MoveOrder::default())
    }
}

impl GameState {
    /// Fresh game with the given move-list order.
    pub fn with_order(order: MoveOrder) -> Self {
        Self {
            history: vec![MoveRecord::start()],
            current: 0,
            order,
        }
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn current_position(&self) -> usize {
        self.current
    }

    pub fn order(&self) -> MoveOrder {
        self.order
    }

    pub fn current_board(&self) -> &Board {
        &self.history[self.current].board
    }

    /// Player whose turn it is at the current position.
    pub fn next_player(&self) -> Player {
        Player::for_position(self.current)
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(self.current_board())
    }
}
