//! Counter feature module.
//!
//! Holds one integer and the status of its async fetch.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Value plus fetch status (Idle, Loading, Failed)
//! - `intent.rs` - Commands and fetch lifecycle events
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `fetch.rs` - Async count source
//! - `thunks.rs` - Async increment and increment-if-odd
//! - `selectors.rs` - Read accessors over the root state

mod fetch;
mod intent;
mod reducer;
mod selectors;
mod state;
mod thunks;

pub use fetch::{
    CountFetcher, FetchError, MockCountFetcher, DEFAULT_FETCH_AMOUNT, DEFAULT_FETCH_DELAY,
};
pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use selectors::{select_count, select_status};
pub use state::{CounterState, CounterStatus};
pub use thunks::{increment_async, increment_if_odd, PendingFetch};
