//! Single-owner state store for the notification feed.
//!
//! All transitions flow through one task: producers dispatch intents over an
//! mpsc channel, the task folds them through the reducer, and consumers
//! observe whole-state snapshots over a watch channel. State is replaced,
//! never mutated in place, so a reader sees the state before or after a
//! transition, never a partial one.

use tokio::sync::{mpsc, watch};

use crate::config::StoreConfig;
use crate::feed::{FeedIntent, FeedReducer, NotificationState};
use crate::mvi::Reducer;

/// Errors surfaced by [`FeedHandle`] when the store task is gone.
#[derive(Debug)]
pub enum StoreError {
    Disconnected,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Disconnected => write!(f, "feed store disconnected"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Clonable handle for dispatching intents and observing state.
#[derive(Clone)]
pub struct FeedHandle {
    sender: mpsc::Sender<FeedIntent>,
    state: watch::Receiver<NotificationState>,
}

impl FeedHandle {
    /// Queue an intent for the store task.
    pub async fn dispatch(&self, intent: FeedIntent) -> Result<(), StoreError> {
        self.sender
            .send(intent)
            .await
            .map_err(|_| StoreError::Disconnected)
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> NotificationState {
        self.state.borrow().clone()
    }

    /// Wait until the state is replaced with a different value.
    pub async fn changed(&mut self) -> Result<(), StoreError> {
        self.state
            .changed()
            .await
            .map_err(|_| StoreError::Disconnected)
    }

    /// Dedicated receiver for select-style consumers.
    pub fn watch(&self) -> watch::Receiver<NotificationState> {
        self.state.clone()
    }
}

/// The store task. Owns the intent receiver and the published state.
pub struct FeedStore {
    receiver: mpsc::Receiver<FeedIntent>,
    state_tx: watch::Sender<NotificationState>,
}

impl FeedStore {
    /// Create a store with default configuration.
    pub fn new() -> (FeedHandle, FeedStore) {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> (FeedHandle, FeedStore) {
        let (sender, receiver) = mpsc::channel(config.channel_capacity.max(1));
        let (state_tx, state) = watch::channel(NotificationState::default());
        (
            FeedHandle { sender, state },
            FeedStore { receiver, state_tx },
        )
    }

    /// Consume intents until every handle is dropped.
    ///
    /// Value-equal transitions are not published, so watchers wake only when
    /// the state actually changed.
    pub async fn run(mut self) {
        while let Some(intent) = self.receiver.recv().await {
            let label = intent.label();
            let replaced = self.state_tx.send_if_modified(|state| {
                let next = FeedReducer::reduce(state.clone(), intent);
                if next == *state {
                    false
                } else {
                    *state = next;
                    true
                }
            });
            if replaced {
                tracing::debug!(intent = label, "feed state replaced");
            } else {
                tracing::trace!(intent = label, "feed state unchanged");
            }
        }
    }
}
