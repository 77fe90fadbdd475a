//! Base trait for state snapshots in MVI architecture.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
/// - Shareable across threads (the container hands out clones)
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
