//! Error taxonomy for feed operations.
//!
//! Errors arrive from the network layer and are recorded into state
//! verbatim; the reducer never inspects, transforms, or retries them.
//! Retries, if desired, show up as new started intents.

use thiserror::Error;

/// Failure of one remote feed operation.
///
/// The payload is the network layer's message, carried opaquely for the
/// presentation layer to surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The main list fetch failed.
    #[error("notification fetch failed: {0}")]
    Fetch(String),

    /// The unread counter fetch failed.
    #[error("unread count fetch failed: {0}")]
    UnreadCountFetch(String),

    #[error("mark as read failed: {0}")]
    MarkRead(String),

    #[error("mark as unread failed: {0}")]
    MarkUnread(String),

    #[error("mark all as read failed: {0}")]
    MarkAllRead(String),

    #[error("notification removal failed: {0}")]
    Remove(String),
}

impl FeedError {
    /// Operation tag for logging.
    pub fn operation(&self) -> &'static str {
        match self {
            FeedError::Fetch(_) => "fetch",
            FeedError::UnreadCountFetch(_) => "unread_count_fetch",
            FeedError::MarkRead(_) => "mark_read",
            FeedError::MarkUnread(_) => "mark_unread",
            FeedError::MarkAllRead(_) => "mark_all_read",
            FeedError::Remove(_) => "remove",
        }
    }
}
