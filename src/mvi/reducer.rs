//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// Capabilities it needs (a fetcher, an endpoint) are injected into the
/// reducer value at construction, so `reduce` takes `&self`. Apart from
/// calling those capabilities it must not touch anything else.
pub trait Reducer: Send + Sync {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Self::State;
}
