//! Model-View-Intent (MVI) architecture primitives.
//!
//! Every piece of mutable UI state in the game lives in a state struct that
//! is only ever replaced by a reducer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: Clicks, key presses, resolved to a game or focus action
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
