//! Dispatcher binding a reducer to a state container.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::ReentrantMutex;

use crate::mvi::Reducer;
use crate::store::StateContainer;

/// Intents waiting to be reduced. `None` when no dispatch is running.
type Pending<I> = RefCell<Option<VecDeque<I>>>;

/// Applies intents to a [`StateContainer`] through a [`Reducer`].
///
/// `send` is synchronous: it returns after the reducer has run and every
/// subscriber has been notified. Sends from different threads are
/// serialised, so each one observes the state left by the previous one.
///
/// A subscriber that sends from inside its notification does not run the
/// reducer right away. The intent is queued and reduced once the current
/// state has reached every subscriber, so all subscribers see states in
/// the order they were produced. Such a nested `send` returns before its
/// intent has been applied.
pub struct Dispatcher<R: Reducer> {
    reducer: Arc<R>,
    state: StateContainer<R::State>,
    pending: Arc<ReentrantMutex<Pending<R::Intent>>>,
}

impl<R: Reducer> Clone for Dispatcher<R> {
    fn clone(&self) -> Self {
        Self {
            reducer: Arc::clone(&self.reducer),
            state: self.state.clone(),
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<R: Reducer> Dispatcher<R> {
    pub fn new(state: StateContainer<R::State>, reducer: R) -> Self {
        Self {
            reducer: Arc::new(reducer),
            state,
            pending: Arc::new(ReentrantMutex::new(RefCell::new(None))),
        }
    }

    /// Reduce `intent` against the current state and publish the result.
    pub fn send(&self, intent: R::Intent) {
        let guard = self.pending.lock();

        {
            let mut pending = guard.borrow_mut();
            if let Some(queue) = pending.as_mut() {
                // Called from a subscriber; the outer send drains it.
                queue.push_back(intent);
                return;
            }
            *pending = Some(VecDeque::from([intent]));
        }

        let _reset = ResetOnExit(&*guard);
        loop {
            let next_intent = guard.borrow_mut().as_mut().and_then(VecDeque::pop_front);
            let Some(intent) = next_intent else {
                break;
            };
            let current = self.state.get();
            let next = self.reducer.reduce(current, intent);
            self.state.set(next);
        }
    }

    /// The container this dispatcher writes to.
    pub fn state(&self) -> &StateContainer<R::State> {
        &self.state
    }
}

/// Marks the dispatch as finished even if the reducer or a subscriber panics.
struct ResetOnExit<'a, I>(&'a Pending<I>);

impl<I> Drop for ResetOnExit<'_, I> {
    fn drop(&mut self) {
        *self.0.borrow_mut() = None;
    }
}
