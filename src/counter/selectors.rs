//! Read accessors over the root state.

use crate::store::AppState;

use super::state::CounterStatus;

/// Current counter value.
pub fn select_count(state: &AppState) -> i64 {
    state.counter.value
}

/// Status of the async fetch.
pub fn select_status(state: &AppState) -> CounterStatus {
    state.counter.status
}
