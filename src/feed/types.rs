//! Notification record and request sequence numbers.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single notification record as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique id, stable across fetches.
    pub id: String,
    /// When the notification was produced. Orders the display projection.
    pub timestamp: DateTime<Utc>,
    pub unread: bool,
    /// Soft-delete marker. Only consulted by change detection; removal from
    /// the feed happens through explicit remove intents.
    #[serde(default)]
    pub deleted: bool,
    /// Display fields the engine passes through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Sequence number tagging one fetch lifecycle.
///
/// The network layer allocates a number when it issues a request and tags
/// the started intent and the matching terminal intent with it. The reducer
/// ignores terminal intents whose number no longer matches the one stored in
/// the status region, so a late result from a superseded request cannot
/// overwrite newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestSeq(u64);

impl RequestSeq {
    /// Allocate the next sequence number. Monotonic process-wide.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn sequence_numbers_are_unique() {
        let a = RequestSeq::next();
        let b = RequestSeq::next();
        let c = RequestSeq::next();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn notification_deserializes_with_extra_fields() {
        let raw = serde_json::json!({
            "id": "n1",
            "timestamp": "2020-01-01T00:00:00Z",
            "unread": true,
            "verb": "run_completed",
            "actor": {"username": "admin"},
        });
        let notification: Notification =
            serde_json::from_value(raw).expect("notification");
        assert_eq!(notification.id, "n1");
        assert!(notification.unread);
        assert!(!notification.deleted);
        assert_eq!(
            notification.timestamp,
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(notification.extra["verb"], "run_completed");
    }

    #[test]
    fn extra_fields_survive_serialization() {
        let raw = serde_json::json!({
            "id": "n2",
            "timestamp": "2021-06-15T12:30:00Z",
            "unread": false,
            "deleted": true,
            "verb": "added_to_group",
        });
        let notification: Notification =
            serde_json::from_value(raw.clone()).expect("notification");
        let back = serde_json::to_value(&notification).expect("value");
        assert_eq!(back["verb"], raw["verb"]);
        assert_eq!(back["deleted"], raw["deleted"]);
    }
}
