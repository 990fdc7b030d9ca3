//! Store - holds application state and runs the dispatch loop
//!
//! ```text
//! dispatch(action) → InterceptedReducer → new state → subscribers → pending actions
//! ```
//!
//! Everything runs on the caller's thread. A dispatch runs to completion,
//! including the actions queued on the `Dispatcher` while it ran, before
//! `dispatch` returns.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver};

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::meta_reducer::InterceptedReducer;
use crate::state::AppState;

/// Handle for a store subscription
///
/// Delivery stops when the handle is dropped or `unsubscribe` is called; the
/// store forgets the listener before its next notification cycle.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    active: Rc<Cell<bool>>,
}

impl Subscription {
    /// Same as dropping the handle
    pub fn unsubscribe(self) {}

    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.active.set(false);
    }
}

trait Listener {
    fn notify(&mut self, state: &AppState);
}

/// Emits a projection only when it differs from the last emitted value
struct SelectListener<T, P, F> {
    projection: P,
    on_change: F,
    last: T,
}

impl<T, P, F> Listener for SelectListener<T, P, F>
where
    T: PartialEq,
    P: Fn(&AppState) -> T,
    F: FnMut(&T),
{
    fn notify(&mut self, state: &AppState) {
        let value = (self.projection)(state);
        if value != self.last {
            (self.on_change)(&value);
            self.last = value;
        }
    }
}

struct Subscriber {
    active: Rc<Cell<bool>>,
    listener: Box<dyn Listener>,
}

pub struct Store {
    state: AppState,
    reducer: InterceptedReducer,
    subscribers: Vec<Subscriber>,
    dispatcher: Dispatcher,
    pending_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState, reducer: InterceptedReducer) -> Self {
        let (action_tx, pending_rx) = mpsc::channel();
        Self {
            state: initial_state,
            reducer,
            subscribers: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            pending_rx,
        }
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a dispatcher for queueing actions from outside a dispatch
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Dispatch an action, then everything it caused to be queued
    pub fn dispatch(&mut self, action: Action) {
        self.process(action);
        self.drain_pending();
    }

    /// Process actions queued on the dispatcher, oldest first
    pub fn drain_pending(&mut self) {
        while let Ok(action) = self.pending_rx.try_recv() {
            self.process(action);
        }
    }

    /// Observe a projection of the state
    ///
    /// `on_change` receives the current value right away, then every value
    /// that differs from the previously delivered one.
    pub fn select<T, P, F>(&mut self, projection: P, mut on_change: F) -> Subscription
    where
        T: PartialEq + 'static,
        P: Fn(&AppState) -> T + 'static,
        F: FnMut(&T) + 'static,
    {
        let initial = projection(&self.state);
        on_change(&initial);

        let active = Rc::new(Cell::new(true));
        self.subscribers.push(Subscriber {
            active: active.clone(),
            listener: Box::new(SelectListener {
                projection,
                on_change,
                last: initial,
            }),
        });

        self.drain_pending();
        Subscription { active }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|subscriber| subscriber.active.get())
            .count()
    }

    fn process(&mut self, action: Action) {
        self.state = self.reducer.reduce(&self.state, &action);

        self.subscribers.retain(|subscriber| subscriber.active.get());
        for subscriber in &mut self.subscribers {
            // A listener earlier in this cycle may have dropped a later one
            if subscriber.active.get() {
                subscriber.listener.notify(&self.state);
            }
        }
    }
}
