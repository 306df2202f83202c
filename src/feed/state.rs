//! State for the notification feed.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::cancel::CancelHandle;
use crate::error::FeedError;
use crate::mvi::StoreState;

use super::types::{Notification, RequestSeq};

/// In-flight status of one remote operation region.
///
/// `fetching`/`fetched` are tri-state: `None` before the first fetch ever
/// runs, `Some` afterwards. `cancel` and `request` are present exactly while
/// `fetching == Some(true)` and cleared on every terminal transition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchStatus {
    pub fetching: Option<bool>,
    pub fetched: Option<bool>,
    pub error: Option<FeedError>,
    pub cancel: Option<CancelHandle>,
    pub request: Option<RequestSeq>,
}

/// The authoritative notification set and its display projection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedData {
    pub notifications: BTreeMap<String, Notification>,
    /// Values of `notifications` ordered by timestamp descending. Derived,
    /// never independently mutated.
    pub sorted: Vec<Notification>,
    /// Opaque pagination token, passed through unchanged.
    pub next_page: Option<Value>,
    /// Opaque range descriptor, passed through unchanged.
    pub range: Option<Value>,
}

impl FeedData {
    /// Change detection for a fetch result: the incoming list counts as a
    /// change when its length differs from the stored set, or when any entry
    /// matching a stored id differs in its `unread` or `deleted` flag.
    pub(crate) fn changed_by(&self, incoming: &[Notification]) -> bool {
        if self.notifications.len() != incoming.len() {
            return true;
        }
        incoming.iter().any(|n| {
            self.notifications
                .get(&n.id)
                .is_some_and(|old| old.unread != n.unread || old.deleted != n.deleted)
        })
    }
}

/// Unread counter value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnreadCountData {
    pub unread_count: u64,
}

/// Unread counter region: the same status/data split as the main feed,
/// scoped to a single integer fetched separately.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnreadCountState {
    pub status: FetchStatus,
    pub data: UnreadCountData,
}

/// Top-level notification feed state.
///
/// Replaced wholesale on every transition; `data` sits behind an `Arc` so
/// transitions that leave the notification set untouched reuse the same
/// allocation. Consumers can rely on `Arc::ptr_eq` to skip recomputation
/// when the data region did not change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationState {
    pub status: FetchStatus,
    pub data: Arc<FeedData>,
    pub unread_count: UnreadCountState,
}

impl StoreState for NotificationState {}

impl NotificationState {
    /// True when no fetch has ever run and the feed is empty.
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }
}

/// Sort projection: all values of the map ordered by timestamp descending.
///
/// The stable sort over the map's id-ordered iteration keeps entries with
/// equal timestamps in id order, so the projection is deterministic.
pub fn sorted_by_timestamp(notifications: &BTreeMap<String, Notification>) -> Vec<Notification> {
    let mut sorted: Vec<Notification> = notifications.values().cloned().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}
