//! Cancellation handles for outstanding remote operations.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Opaque cancellation handle for one outstanding request.
///
/// The network layer creates the handle when it issues a request, sends a
/// clone to the store inside the started intent, and selects on
/// [`cancelled`](CancelHandle::cancelled) while the request is in flight.
/// When a new fetch supersedes an outstanding one, the previous request is
/// aborted through the handle stored in state.
///
/// Clones share the underlying flag. The engine only carries the handle; it
/// never invokes it.
#[derive(Clone)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Wait until [`cancel`](CancelHandle::cancel) is called.
    pub async fn cancelled(&self) {
        // Subscribe to Notify BEFORE checking the flag to avoid TOCTOU race:
        // cancel() could fire between the check and the await, and
        // notify_waiters() would have no subscribers, losing the signal.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

impl Default for CancelHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Handles compare by identity: two handles are equal when they share the
/// same underlying flag, regardless of whether it has fired.
impl PartialEq for CancelHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cancelled, &other.cancelled)
    }
}

impl fmt::Debug for CancelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelHandle")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
