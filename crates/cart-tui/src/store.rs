//! Store - holds application state and runs the Redux loop
//!
//! ```text
//! dispatch(action) → middleware chain → every slice reducer → swap state → notify subscribers
//!                                                                         → drain follow-ups
//! ```
//!
//! The store is a cheap, cloneable, single-threaded handle. It is built once
//! with a fixed set of named slices and passed explicitly to whoever needs it.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::error::StoreError;
use crate::middleware::Middleware;
use crate::reducer::{Reducer, SliceEntry};
use crate::reducers::app_reducer;
use crate::state::AppState;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn(&AppState)>;

struct Inner {
    state: RefCell<AppState>,
    slices: Vec<SliceEntry>,
    middleware: RefCell<Vec<Box<dyn Middleware>>>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_listener_id: Cell<u64>,
    dispatching: Cell<bool>,
    dispatcher: Dispatcher,
}

/// Handle to the application store
#[derive(Clone)]
pub struct Store {
    inner: Rc<Inner>,
}

/// Builder collecting slices and middleware before the store exists
#[derive(Default)]
pub struct StoreBuilder {
    slices: Vec<SliceEntry>,
    middleware: Vec<Box<dyn Middleware>>,
}

impl StoreBuilder {
    /// Register a slice reducer under `name`, starting from its initial state
    pub fn slice<R: Reducer>(mut self, name: &'static str, reducer: R) -> Self {
        self.slices.push(SliceEntry::new(name, reducer));
        self
    }

    /// Register a slice reducer under `name`, starting from `state`
    pub fn slice_with_state<R: Reducer>(
        mut self,
        name: &'static str,
        reducer: R,
        state: R::State,
    ) -> Self {
        self.slices.push(SliceEntry::with_state(name, reducer, state));
        self
    }

    /// Add middleware; middleware runs in the order it was added
    pub fn middleware(mut self, middleware: impl Middleware + 'static) -> Self {
        self.middleware.push(Box::new(middleware));
        self
    }

    pub fn build(self) -> Result<Store, StoreError> {
        let mut seen = HashSet::new();
        for entry in &self.slices {
            if !seen.insert(entry.name) {
                return Err(StoreError::DuplicateSlice(entry.name));
            }
        }

        let state = AppState::from_slices(
            self.slices
                .iter()
                .map(|entry| (entry.name, entry.initial.clone()))
                .collect(),
        );
        log::debug!(
            "Store built with slices {:?} and {} middleware",
            state.slice_names().collect::<Vec<_>>(),
            self.middleware.len()
        );

        Ok(Store {
            inner: Rc::new(Inner {
                state: RefCell::new(state),
                slices: self.slices,
                middleware: RefCell::new(self.middleware),
                listeners: RefCell::new(Vec::new()),
                next_listener_id: Cell::new(0),
                dispatching: Cell::new(false),
                dispatcher: Dispatcher::new(),
            }),
        })
    }
}

/// Clears the in-flight flag even if a listener panics
struct DispatchGuard<'a>(&'a Cell<bool>);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl Store {
    pub fn builder() -> StoreBuilder {
        StoreBuilder::default()
    }

    /// Snapshot of the current state
    ///
    /// Slice values are shared, so this is cheap. The snapshot never changes,
    /// later dispatches swap in a new state instead of editing this one.
    pub fn get_state(&self) -> AppState {
        self.inner.state.borrow().clone()
    }

    /// Process an action through middleware chain and reducers
    ///
    /// Runs to completion before returning: the state is replaced, every
    /// subscriber has been notified, and follow-up actions queued by
    /// middleware have been processed.
    ///
    /// Fails with [`StoreError::ReentrantDispatch`] when called from inside a
    /// reducer, middleware or subscriber, and with
    /// [`StoreError::ReducerPanicked`] when a reducer panics. In both cases the
    /// state is left as it was.
    ///
    /// Every queued follow-up is attempted even if an earlier one fails. The
    /// first failure comes back as [`StoreError::FollowUpFailed`]; by then the
    /// action itself has landed and subscribers have seen it.
    pub fn dispatch(&self, action: impl Into<Action>) -> Result<(), StoreError> {
        let action = action.into();

        if self.inner.dispatching.replace(true) {
            log::warn!("Rejected reentrant dispatch of {}", action.action_type());
            return Err(StoreError::ReentrantDispatch {
                action_type: action.action_type(),
            });
        }

        let result = {
            let _guard = DispatchGuard(&self.inner.dispatching);
            self.process(&action)
        };

        if let Err(err) = &result {
            log::error!("Dispatch of {} failed: {}", action.action_type(), err);
            // Follow-ups belong to an action that never landed
            self.inner.dispatcher.drain();
            return result;
        }

        let mut first_failure = None;
        for follow_up in self.inner.dispatcher.drain() {
            let action_type = follow_up.action_type();
            if let Err(err) = self.dispatch(follow_up) {
                first_failure.get_or_insert(StoreError::FollowUpFailed {
                    action_type,
                    source: Box::new(err),
                });
            }
        }

        match first_failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn process(&self, action: &Action) -> Result<(), StoreError> {
        let snapshot = self.get_state();

        {
            let mut chain = self.inner.middleware.borrow_mut();
            for middleware in chain.iter_mut() {
                if !middleware.handle(action, &snapshot, &self.inner.dispatcher) {
                    log::debug!("Action {} consumed by middleware", action.action_type());
                    return Ok(());
                }
            }
        }

        let next = app_reducer::reduce(&snapshot, &self.inner.slices, action)?;
        *self.inner.state.borrow_mut() = next.clone();

        // Snapshot the listener list so listeners may (un)subscribe while being notified
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&next);
        }

        Ok(())
    }

    /// Register a listener called with the new state after every dispatch
    pub fn subscribe(&self, listener: impl Fn(&AppState) + 'static) -> Subscription {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        let listener: Listener = Rc::new(listener);
        self.inner.listeners.borrow_mut().push((id, listener));

        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

/// Returned by [`Store::subscribe`]; dropping it keeps the listener registered
pub struct Subscription {
    id: u64,
    store: Weak<Inner>,
}

impl Subscription {
    /// Remove the listener. A no-op if the store is already gone.
    pub fn unsubscribe(self) {
        if let Some(inner) = self.store.upgrade() {
            inner
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}
