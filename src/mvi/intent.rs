//! Base trait for intents (events and actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Completed or started remote operations (fetch results, failures)
/// - User actions relayed by the presentation layer (mark read, remove)
/// - Session boundaries (logout)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
