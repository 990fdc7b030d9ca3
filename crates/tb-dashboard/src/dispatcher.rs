//! Dispatcher for deferred action dispatch
//!
//! Collaborators that cannot borrow the store (the hash synchronizer reacting
//! to an external fragment change, completions of deferred work) queue actions
//! here. The store processes queued actions after the dispatch in progress, or
//! on `Store::drain_pending`, in the order they were queued.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Cloneable handle for queueing actions into the store
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a dispatcher feeding the store's pending-action channel
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for the store
    ///
    /// Never fails for the caller; if the store is gone the action is dropped
    /// and logged.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
