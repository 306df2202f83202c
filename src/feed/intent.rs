//! Intents for the notification feed.

use serde_json::Value;

use crate::cancel::CancelHandle;
use crate::error::FeedError;
use crate::mvi::Intent;

use super::types::{Notification, RequestSeq};

/// Events folded into the notification feed state.
///
/// Each variant carries exactly the payload its transition needs. Fetch
/// lifecycle intents are tagged with the [`RequestSeq`] allocated when the
/// request was issued, so late results from superseded requests are ignored.
///
/// Mutations (`MarkRead`, `MarkUnread`, `MarkAllRead`, `Remove`) are applied
/// on confirmed success only; the network layer dispatches the intent after
/// the server acknowledged the operation, never optimistically.
#[derive(Debug, Clone)]
pub enum FeedIntent {
    /// A feed fetch was issued; `cancel` aborts it while outstanding.
    FetchStarted {
        request: RequestSeq,
        cancel: CancelHandle,
    },

    /// A feed fetch completed with the authoritative notification list.
    FetchSucceeded {
        request: RequestSeq,
        notifications: Vec<Notification>,
        next_page: Option<Value>,
        range: Option<Value>,
    },

    FetchFailed {
        request: RequestSeq,
        error: FeedError,
    },

    /// The server confirmed these ids as read.
    MarkRead { ids: Vec<String> },

    MarkReadFailed { error: FeedError },

    /// The server confirmed these ids as unread.
    MarkUnread { ids: Vec<String> },

    MarkUnreadFailed { error: FeedError },

    /// The server confirmed every notification as read.
    MarkAllRead,

    MarkAllReadFailed { error: FeedError },

    /// The server confirmed removal of these ids.
    Remove { ids: Vec<String> },

    RemoveFailed { error: FeedError },

    /// An unread counter fetch was issued.
    UnreadCountFetchStarted {
        request: RequestSeq,
        cancel: CancelHandle,
    },

    UnreadCountFetchSucceeded {
        request: RequestSeq,
        unread_count: u64,
    },

    UnreadCountFetchFailed {
        request: RequestSeq,
        error: FeedError,
    },

    /// The session ended; the whole state resets to its initial value.
    SessionLoggedOut,
}

impl Intent for FeedIntent {}

impl FeedIntent {
    /// Short tag for tracing.
    pub fn label(&self) -> &'static str {
        match self {
            FeedIntent::FetchStarted { .. } => "fetch_started",
            FeedIntent::FetchSucceeded { .. } => "fetch_succeeded",
            FeedIntent::FetchFailed { .. } => "fetch_failed",
            FeedIntent::MarkRead { .. } => "mark_read",
            FeedIntent::MarkReadFailed { .. } => "mark_read_failed",
            FeedIntent::MarkUnread { .. } => "mark_unread",
            FeedIntent::MarkUnreadFailed { .. } => "mark_unread_failed",
            FeedIntent::MarkAllRead => "mark_all_read",
            FeedIntent::MarkAllReadFailed { .. } => "mark_all_read_failed",
            FeedIntent::Remove { .. } => "remove",
            FeedIntent::RemoveFailed { .. } => "remove_failed",
            FeedIntent::UnreadCountFetchStarted { .. } => "unread_count_fetch_started",
            FeedIntent::UnreadCountFetchSucceeded { .. } => "unread_count_fetch_succeeded",
            FeedIntent::UnreadCountFetchFailed { .. } => "unread_count_fetch_failed",
            FeedIntent::SessionLoggedOut => "session_logged_out",
        }
    }
}
