//! Client-side notification feed state engine.
//!
//! `notifeed` keeps a user's notification feed consistent while remote
//! operations complete out of order: the authoritative notification set, a
//! timestamp-ordered display projection, and a separately fetched unread
//! counter. All transitions go through a pure reducer; a single-owner store
//! task folds intents arriving from the network layer and publishes
//! whole-state snapshots to consumers.
//!
//! The engine performs no I/O itself. The network layer issues requests and
//! translates their outcomes into [`FeedIntent`] values; the presentation
//! layer renders [`NotificationState`] snapshots and dispatches new intents
//! in response to user interaction.

pub mod cancel;
pub mod config;
pub mod error;
pub mod feed;
pub mod mvi;
pub mod store;

pub use cancel::CancelHandle;
pub use config::StoreConfig;
pub use error::FeedError;
pub use feed::{FeedIntent, FeedReducer, Notification, NotificationState, RequestSeq};
pub use store::{FeedHandle, FeedStore, StoreError};
