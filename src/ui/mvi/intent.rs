//! Base trait for intents (user actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user actions (cell clicks, history jumps, key
/// presses). Views hand them out ready-made, so dispatching one never
/// needs extra context.
pub trait Intent: Send + 'static {}
