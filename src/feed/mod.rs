//! Notification feed feature module.
//!
//! Maintains the client-side view of a user's notification feed: the
//! authoritative notification set, its timestamp-ordered display projection,
//! and the separately fetched unread counter.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `types.rs` - Notification record and request sequence numbers
//! - `state.rs` - State aggregate and the sort projection
//! - `intent.rs` - Events produced by the network layer and user actions
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;
mod types;

pub use intent::FeedIntent;
pub use reducer::FeedReducer;
pub use state::{
    sorted_by_timestamp, FeedData, FetchStatus, NotificationState, UnreadCountData,
    UnreadCountState,
};
pub use types::{Notification, RequestSeq};
