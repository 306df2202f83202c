//! Shared test utilities.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use notifeed::mvi::Reducer;
use notifeed::{
    CancelHandle, FeedIntent, FeedReducer, Notification, NotificationState, RequestSeq,
};
use serde_json::Map;

pub fn note(id: &str, day: u32, unread: bool) -> Notification {
    Notification {
        id: id.to_string(),
        timestamp: Utc.with_ymd_and_hms(2020, 1, day, 0, 0, 0).unwrap(),
        unread,
        deleted: false,
        extra: Map::new(),
    }
}

/// Run a full fetch lifecycle against `state` and return the result.
pub fn apply_fetch(state: NotificationState, notes: Vec<Notification>) -> NotificationState {
    let request = RequestSeq::next();
    let state = FeedReducer::reduce(
        state,
        FeedIntent::FetchStarted {
            request,
            cancel: CancelHandle::new(),
        },
    );
    FeedReducer::reduce(
        state,
        FeedIntent::FetchSucceeded {
            request,
            notifications: notes,
            next_page: None,
            range: None,
        },
    )
}

/// Run a full unread-counter fetch lifecycle against `state`.
pub fn apply_unread_count(state: NotificationState, unread_count: u64) -> NotificationState {
    let request = RequestSeq::next();
    let state = FeedReducer::reduce(
        state,
        FeedIntent::UnreadCountFetchStarted {
            request,
            cancel: CancelHandle::new(),
        },
    );
    FeedReducer::reduce(
        state,
        FeedIntent::UnreadCountFetchSucceeded {
            request,
            unread_count,
        },
    )
}
