use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ui::game::MoveOrder;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub moves: MovesConfig,
}

/// Terminal behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long the input thread waits for a terminal event, in
    /// milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Capture mouse clicks (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

/// Move-list settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovesConfig {
    /// Order the move list starts in.
    #[serde(default)]
    pub order: MoveOrder,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_mouse() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse: default_mouse(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
