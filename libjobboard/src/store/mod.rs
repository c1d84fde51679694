//! Observable store of backend resource state
//!
//! [`Store`] owns the current [`BoardState`] inside a `tokio::sync::watch`
//! channel. Every mutation goes through [`Store::dispatch`] (or
//! [`Store::begin`] for request transitions), which runs the pure
//! [`reduce`] inside one `send_if_modified` call and wakes subscribers only
//! when the state actually changed.
//!
//! # Examples
//!
//! ```
//! use libjobboard::store::{Action, ResourceKey, Store};
//!
//! let store = Store::new();
//! let token = store.begin(ResourceKey::Jobs);
//! assert!(store.snapshot().jobs.snapshot().loading());
//!
//! store.dispatch(Action::JobsLoaded { token, jobs: Vec::new() });
//! assert!(store.snapshot().jobs.snapshot().is_ready());
//! ```

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

pub mod actions;
pub mod reducer;
pub mod resource;
pub mod state;

pub use actions::{Action, ResourceKey};
pub use reducer::reduce;
pub use resource::{AsyncResource, DataPolicy, Phase, RequestToken, ResourcePolicy, Snapshot};
pub use state::BoardState;

/// Shared handle to one board's state; clones observe the same state
#[derive(Clone)]
pub struct Store {
    tx: Arc<watch::Sender<BoardState>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(BoardState::default())
    }

    pub fn with_state(state: BoardState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx: Arc::new(tx) }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> BoardState {
        self.tx.borrow().clone()
    }

    /// Receiver that is notified after every state-changing dispatch
    pub fn subscribe(&self) -> watch::Receiver<BoardState> {
        self.tx.subscribe()
    }

    /// Apply `action`; returns true iff the visible state changed
    ///
    /// Terminal actions for a superseded request are discarded.
    pub fn dispatch(&self, action: Action) -> bool {
        let terminal = action.terminal();
        self.tx.send_if_modified(move |state| {
            if let Some((resource, token)) = terminal {
                let latest = state.latest_token(resource);
                if token != latest {
                    debug!(%resource, %token, %latest, "discarding superseded result");
                    return false;
                }
            }
            replace(state, action)
        })
    }

    /// Dispatch [`Action::Request`] for `key` and return the token that its
    /// terminal action must carry
    pub fn begin(&self, key: ResourceKey) -> RequestToken {
        let mut token = RequestToken::default();
        self.tx.send_if_modified(|state| {
            let changed = replace(state, Action::Request(key));
            token = state.latest_token(key);
            changed
        });
        debug!(resource = %key, %token, "request started");
        token
    }
}

/// Store the reduced state; report whether anything visible changed
fn replace(state: &mut BoardState, action: Action) -> bool {
    let next = reduce(state.clone(), action);
    // tokens always advance on a request even when the snapshot does not
    let changed = next != *state;
    *state = next;
    changed
}
