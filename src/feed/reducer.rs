//! Reducer for the notification feed.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::FeedError;
use crate::mvi::Reducer;

use super::intent::FeedIntent;
use super::state::{
    sorted_by_timestamp, FeedData, FetchStatus, NotificationState, UnreadCountData,
    UnreadCountState,
};
use super::types::Notification;

/// Reducer for notification feed state transitions.
///
/// Pure function. All side effects (issuing requests, cancelling superseded
/// ones, rendering) live with the network and presentation layers around the
/// dispatch call.
///
/// The unread counter is maintained incrementally: each mutation adjusts it
/// by the number of entries whose `unread` flag actually flips, rather than
/// recounting the whole set. A fetch result whose flags disagree with the
/// separately fetched counter can therefore leave the counter stale until
/// the next counter fetch; decrements saturate at zero so it cannot
/// underflow.
pub struct FeedReducer;

impl Reducer for FeedReducer {
    type State = NotificationState;
    type Intent = FeedIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FeedIntent::FetchStarted { request, cancel } => NotificationState {
                status: FetchStatus {
                    fetching: Some(true),
                    fetched: Some(false),
                    error: None,
                    cancel: Some(cancel),
                    request: Some(request),
                },
                ..state
            },

            FeedIntent::FetchSucceeded {
                request,
                notifications,
                next_page,
                range,
            } => {
                if state.status.request != Some(request) {
                    // Result of a superseded or already-settled fetch.
                    return state;
                }
                let status = FetchStatus {
                    fetching: Some(false),
                    fetched: Some(true),
                    error: None,
                    cancel: None,
                    request: None,
                };
                if !state.data.changed_by(&notifications) {
                    // Only the status region moves; data keeps its
                    // allocation so downstream consumers skip re-rendering.
                    return NotificationState { status, ..state };
                }
                let map: BTreeMap<String, Notification> = notifications
                    .into_iter()
                    .map(|n| (n.id.clone(), n))
                    .collect();
                let sorted = sorted_by_timestamp(&map);
                NotificationState {
                    status,
                    data: Arc::new(FeedData {
                        notifications: map,
                        sorted,
                        next_page,
                        range,
                    }),
                    unread_count: state.unread_count,
                }
            }

            FeedIntent::FetchFailed { request, error } => {
                if state.status.request != Some(request) {
                    return state;
                }
                NotificationState {
                    status: FetchStatus {
                        fetching: Some(false),
                        fetched: Some(false),
                        error: Some(error),
                        cancel: None,
                        request: None,
                    },
                    ..state
                }
            }

            FeedIntent::MarkRead { ids } => {
                let mut notifications = state.data.notifications.clone();
                let mut unread_count = state.unread_count.data.unread_count;
                for id in &ids {
                    if let Some(n) = notifications.get_mut(id) {
                        if n.unread {
                            unread_count = unread_count.saturating_sub(1);
                            n.unread = false;
                        }
                    }
                }
                rebuild(state, notifications, unread_count)
            }

            FeedIntent::MarkReadFailed { error } => record_error(state, error),

            FeedIntent::MarkUnread { ids } => {
                let mut notifications = state.data.notifications.clone();
                let mut unread_count = state.unread_count.data.unread_count;
                for id in &ids {
                    if let Some(n) = notifications.get_mut(id) {
                        if !n.unread {
                            unread_count += 1;
                            n.unread = true;
                        }
                    }
                }
                rebuild(state, notifications, unread_count)
            }

            FeedIntent::MarkUnreadFailed { error } => record_error(state, error),

            FeedIntent::MarkAllRead => {
                let mut notifications = state.data.notifications.clone();
                for n in notifications.values_mut() {
                    n.unread = false;
                }
                rebuild(state, notifications, 0)
            }

            FeedIntent::MarkAllReadFailed { error } => record_error(state, error),

            FeedIntent::Remove { ids } => {
                let mut notifications = state.data.notifications.clone();
                let mut unread_count = state.unread_count.data.unread_count;
                for id in &ids {
                    if let Some(removed) = notifications.remove(id) {
                        if removed.unread {
                            unread_count = unread_count.saturating_sub(1);
                        }
                    }
                }
                rebuild(state, notifications, unread_count)
            }

            FeedIntent::RemoveFailed { error } => record_error(state, error),

            FeedIntent::UnreadCountFetchStarted { request, cancel } => {
                let NotificationState {
                    status,
                    data,
                    unread_count,
                } = state;
                NotificationState {
                    status,
                    data,
                    unread_count: UnreadCountState {
                        status: FetchStatus {
                            fetching: Some(true),
                            fetched: Some(false),
                            error: None,
                            cancel: Some(cancel),
                            request: Some(request),
                        },
                        data: unread_count.data,
                    },
                }
            }

            FeedIntent::UnreadCountFetchSucceeded {
                request,
                unread_count: count,
            } => {
                if state.unread_count.status.request != Some(request) {
                    return state;
                }
                let NotificationState { status, data, .. } = state;
                NotificationState {
                    status,
                    data,
                    unread_count: UnreadCountState {
                        status: FetchStatus {
                            fetching: Some(false),
                            fetched: Some(true),
                            error: None,
                            cancel: None,
                            request: None,
                        },
                        data: UnreadCountData {
                            unread_count: count,
                        },
                    },
                }
            }

            FeedIntent::UnreadCountFetchFailed { request, error } => {
                if state.unread_count.status.request != Some(request) {
                    return state;
                }
                let NotificationState {
                    status,
                    data,
                    unread_count,
                } = state;
                NotificationState {
                    status,
                    data,
                    unread_count: UnreadCountState {
                        status: FetchStatus {
                            fetching: Some(false),
                            fetched: Some(false),
                            error: Some(error),
                            cancel: None,
                            request: None,
                        },
                        data: unread_count.data,
                    },
                }
            }

            FeedIntent::SessionLoggedOut => {
                if state.is_initial() {
                    state
                } else {
                    NotificationState::default()
                }
            }
        }
    }
}

/// Record a failed mutation into the main status region. Data and the
/// in-flight fetch fields stay untouched: mutations are applied on confirmed
/// success only, so there is nothing to roll back.
fn record_error(state: NotificationState, error: FeedError) -> NotificationState {
    let NotificationState {
        status,
        data,
        unread_count,
    } = state;
    NotificationState {
        status: FetchStatus {
            error: Some(error),
            ..status
        },
        data,
        unread_count,
    }
}

/// Rebuild the data region after a confirmed mutation, re-deriving the sort
/// projection. Pagination tokens carry over.
fn rebuild(
    state: NotificationState,
    notifications: BTreeMap<String, Notification>,
    unread_count: u64,
) -> NotificationState {
    let sorted = sorted_by_timestamp(&notifications);
    let NotificationState {
        status,
        data,
        unread_count: unread,
    } = state;
    NotificationState {
        status,
        data: Arc::new(FeedData {
            notifications,
            sorted,
            next_page: data.next_page.clone(),
            range: data.range.clone(),
        }),
        unread_count: UnreadCountState {
            status: unread.status,
            data: UnreadCountData { unread_count },
        },
    }
}
