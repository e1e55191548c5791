//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Synchronous commands (increment, decrement)
/// - Lifecycle events of async work (pending, fulfilled, rejected)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: std::fmt::Debug + Send + 'static {}
