//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (load the next page)
/// - Lifecycle events (application start)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
