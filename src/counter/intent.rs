//! Intents for the counter slice.

use crate::mvi::Intent;

/// Intents that can be dispatched to the counter reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterIntent {
    /// Add one to the value.
    Increment,

    /// Subtract one from the value.
    Decrement,

    /// Add an arbitrary (possibly negative) amount.
    IncrementByAmount { amount: i64 },

    /// An async fetch was started.
    FetchPending,

    /// The async fetch resolved with `amount`.
    FetchFulfilled { amount: i64 },

    /// The async fetch failed.
    FetchRejected { message: String },
}

impl Intent for CounterIntent {}
