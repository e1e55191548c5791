//! State for the counter slice.

use serde::{Deserialize, Serialize};

use crate::mvi::SliceState;

/// Lifecycle of the outstanding async fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterStatus {
    /// No fetch in flight (or the last one succeeded).
    #[default]
    Idle,

    /// A fetch has been dispatched and not yet resolved.
    Loading,

    /// The last fetch failed. Value was left untouched.
    Failed,
}

impl std::fmt::Display for CounterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CounterStatus::Idle => write!(f, "idle"),
            CounterStatus::Loading => write!(f, "loading"),
            CounterStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Counter slice state.
///
/// `value` has no bounds and may go negative. `status` only changes in
/// response to async fetch lifecycle intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterState {
    pub value: i64,
    pub status: CounterStatus,
}

impl SliceState for CounterState {}

impl CounterState {
    /// State with the given starting value and `Idle` status.
    pub fn with_value(value: i64) -> Self {
        Self {
            value,
            status: CounterStatus::Idle,
        }
    }

    /// Check if a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self.status, CounterStatus::Loading)
    }
}
