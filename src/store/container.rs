//! Observable state container.
//!
//! Holds exactly one snapshot and notifies subscribers every time it is
//! replaced.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};

use crate::mvi::UiState;

type Callback<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Thread-safe container for the current state snapshot.
///
/// Cloning the container is cheap and yields another handle to the same
/// snapshot and subscriber list.
pub struct StateContainer<S: UiState> {
    inner: Arc<ContainerInner<S>>,
}

struct ContainerInner<S> {
    state: RwLock<S>,
    subscribers: Mutex<Vec<(u64, Callback<S>)>>,
    next_id: AtomicU64,
}

impl<S: UiState> Clone for StateContainer<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: UiState> Default for StateContainer<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: UiState> StateContainer<S> {
    /// Create a container holding `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            inner: Arc::new(ContainerInner {
                state: RwLock::new(initial),
                subscribers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Get a clone of the current snapshot.
    pub fn get(&self) -> S {
        self.inner.state.read().clone()
    }

    /// Replace the snapshot and notify every subscriber with the new value.
    ///
    /// Subscribers run synchronously on the calling thread, in the order
    /// they subscribed. No lock is held while they run, so a subscriber
    /// may read the container or subscribe/unsubscribe.
    pub fn set(&self, new_state: S) {
        *self.inner.state.write() = new_state.clone();

        let callbacks: Vec<Callback<S>> = self
            .inner
            .subscribers
            .lock()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in callbacks {
            callback(&new_state);
        }
    }

    /// Register a callback invoked on every [`set`](Self::set).
    ///
    /// The callback stays registered until [`Subscription::unsubscribe`]
    /// is called; dropping the handle does not unsubscribe.
    pub fn subscribe<F>(&self, callback: F) -> Subscription<S>
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .subscribers
            .lock()
            .push((id, Arc::new(callback)));

        Subscription {
            id,
            container: Arc::downgrade(&self.inner),
        }
    }

    /// Number of currently registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().len()
    }
}

/// Handle returned by [`StateContainer::subscribe`].
pub struct Subscription<S> {
    id: u64,
    container: Weak<ContainerInner<S>>,
}

impl<S> Subscription<S> {
    /// Stop future notifications for this subscriber.
    ///
    /// No-op if the container has already been dropped.
    pub fn unsubscribe(self) {
        if let Some(inner) = self.container.upgrade() {
            inner.subscribers.lock().retain(|(id, _)| *id != self.id);
        }
    }
}
