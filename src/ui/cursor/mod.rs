//! Keyboard focus feature module.
//!
//! Tracks which pane has focus and which board cell / move-list row the
//! keyboard cursor sits on. Mouse clicks do not need it, but they move it
//! so keyboard and mouse stay in agreement.

mod intent;
mod reducer;
mod state;

pub use intent::CursorIntent;
pub use reducer::CursorReducer;
pub use state::{CursorState, Pane};
