mod common;

use std::time::Duration;

use common::note;
use notifeed::{
    CancelHandle, FeedIntent, FeedStore, NotificationState, RequestSeq, StoreConfig, StoreError,
};

#[tokio::test]
async fn store_folds_dispatched_intents() {
    let (handle, store) = FeedStore::new();
    let store_task = tokio::spawn(store.run());

    let request = RequestSeq::next();
    handle
        .dispatch(FeedIntent::FetchStarted {
            request,
            cancel: CancelHandle::new(),
        })
        .await
        .expect("dispatch");
    handle
        .dispatch(FeedIntent::FetchSucceeded {
            request,
            notifications: vec![note("n1", 1, true)],
            next_page: None,
            range: None,
        })
        .await
        .expect("dispatch");

    let mut watcher = handle.watch();
    watcher
        .wait_for(|state| state.status.fetched == Some(true))
        .await
        .expect("fetched state");

    let state = handle.current();
    assert!(state.data.notifications.contains_key("n1"));
    assert_eq!(state.unread_count.data.unread_count, 0);

    drop(handle);
    drop(watcher);
    let _ = store_task.await;
}

#[tokio::test]
async fn stale_result_does_not_wake_watchers() {
    let (handle, store) = FeedStore::new();
    let store_task = tokio::spawn(store.run());

    let first = RequestSeq::next();
    let second = RequestSeq::next();
    handle
        .dispatch(FeedIntent::FetchStarted {
            request: first,
            cancel: CancelHandle::new(),
        })
        .await
        .expect("dispatch");
    handle
        .dispatch(FeedIntent::FetchStarted {
            request: second,
            cancel: CancelHandle::new(),
        })
        .await
        .expect("dispatch");

    let mut watcher = handle.watch();
    watcher
        .wait_for(|state| state.status.request == Some(second))
        .await
        .expect("second fetch outstanding");

    // Late result from the superseded first request: no state change, no
    // notification.
    handle
        .dispatch(FeedIntent::FetchSucceeded {
            request: first,
            notifications: vec![note("stale", 1, true)],
            next_page: None,
            range: None,
        })
        .await
        .expect("dispatch");

    let woke = tokio::time::timeout(Duration::from_millis(50), watcher.changed()).await;
    assert!(woke.is_err(), "watcher should not wake for an ignored intent");
    assert!(handle.current().data.notifications.is_empty());

    drop(handle);
    drop(watcher);
    let _ = store_task.await;
}

#[tokio::test]
async fn logout_resets_published_state() {
    let (handle, store) = FeedStore::with_config(StoreConfig {
        channel_capacity: 4,
    });
    let store_task = tokio::spawn(store.run());

    let request = RequestSeq::next();
    handle
        .dispatch(FeedIntent::FetchStarted {
            request,
            cancel: CancelHandle::new(),
        })
        .await
        .expect("dispatch");
    handle
        .dispatch(FeedIntent::FetchSucceeded {
            request,
            notifications: vec![note("n1", 1, true)],
            next_page: None,
            range: None,
        })
        .await
        .expect("dispatch");

    let mut watcher = handle.watch();
    watcher
        .wait_for(|state| state.status.fetched == Some(true))
        .await
        .expect("fetched state");

    handle
        .dispatch(FeedIntent::SessionLoggedOut)
        .await
        .expect("dispatch");
    watcher
        .wait_for(|state| *state == NotificationState::default())
        .await
        .expect("reset state");

    drop(handle);
    drop(watcher);
    let _ = store_task.await;
}

#[tokio::test]
async fn cloned_handles_observe_the_same_store() {
    let (handle, store) = FeedStore::new();
    let store_task = tokio::spawn(store.run());
    let observer = handle.clone();

    let request = RequestSeq::next();
    handle
        .dispatch(FeedIntent::FetchStarted {
            request,
            cancel: CancelHandle::new(),
        })
        .await
        .expect("dispatch");

    let mut watcher = observer.watch();
    watcher
        .wait_for(|state| state.status.fetching == Some(true))
        .await
        .expect("fetching state");

    drop(handle);
    drop(observer);
    drop(watcher);
    let _ = store_task.await;
}

#[tokio::test]
async fn dispatch_after_store_dropped_returns_disconnected() {
    let (handle, store) = FeedStore::new();
    drop(store);

    let result = handle.dispatch(FeedIntent::SessionLoggedOut).await;
    assert!(matches!(result, Err(StoreError::Disconnected)));
}
