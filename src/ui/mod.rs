pub mod app;
pub mod board;
pub mod cursor;
pub mod events;
pub mod footer;
pub mod game;
pub mod header;
pub mod input;
pub mod layout;
pub mod moves;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
