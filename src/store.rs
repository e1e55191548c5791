//! Application state container.
//!
//! The store owns the root [`AppState`] and is the single place where it
//! changes: every mutation goes through [`Store::dispatch`], which runs the
//! pure root reducer under a write lock. Readers get cloned snapshots.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::debug;

use crate::config::Config;
use crate::counter::{CounterIntent, CounterReducer, CounterState};
use crate::mvi::{Intent, Reducer, SliceState};

/// Root state: one field per slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct AppState {
    pub counter: CounterState,
}

impl SliceState for AppState {}

/// Root action: one variant per slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    Counter(CounterIntent),
}

impl Intent for AppAction {}

impl From<CounterIntent> for AppAction {
    fn from(intent: CounterIntent) -> Self {
        AppAction::Counter(intent)
    }
}

/// Root reducer, delegating each action to its slice.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AppAction::Counter(intent) => AppState {
                counter: CounterReducer::reduce(state.counter, intent),
            },
        }
    }
}

/// Cloneable handle to the shared application state.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: RwLock<AppState>,
    changes: watch::Sender<AppState>,
}

impl Store {
    /// Create a store holding `initial`.
    pub fn new(initial: AppState) -> Self {
        let (changes, _) = watch::channel(initial);
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(initial),
                changes,
            }),
        }
    }

    /// Create a store whose counter starts at the configured value.
    pub fn from_config(config: &Config) -> Self {
        Self::new(AppState {
            counter: CounterState::with_value(config.counter.initial_value),
        })
    }

    /// Snapshot of the current state.
    pub fn get_state(&self) -> AppState {
        *self.inner.state.read()
    }

    /// Apply `action` through the root reducer and return the new state.
    ///
    /// Subscribers are notified while the write lock is still held, so
    /// they observe states in dispatch order.
    pub fn dispatch(&self, action: impl Into<AppAction>) -> AppState {
        let action = action.into();
        let mut guard = self.inner.state.write();
        let prev = *guard;
        let next = AppReducer::reduce(prev, action.clone());
        debug!(?action, ?prev, ?next, "dispatch");
        *guard = next;
        self.inner.changes.send_replace(next);
        next
    }

    /// Receive every state produced by [`Store::dispatch`] from now on.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.inner.changes.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
