//! Game controller feature module.
//!
//! Owns the move history, the current position and the move-list order.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - History, current position, display order
//! - `intent.rs` - Player actions (Play, JumpTo, ToggleOrder)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::GameIntent;
pub use reducer::GameReducer;
pub use state::{GameState, MoveOrder};
