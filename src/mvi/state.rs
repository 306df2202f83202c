//! Base trait for store state in MVI architecture.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data a consumer needs to render)
/// - Comparable (PartialEq for detecting changes)
pub trait StoreState: Clone + PartialEq + Default + Send + 'static {}
