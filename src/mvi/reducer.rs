//! Pure state transitions.

use super::intent::Intent;
use super::state::SliceState;

/// Maps a state and an intent to the next state.
///
/// `Store::dispatch` calls `reduce` under its write lock, once per
/// intent. Anything that awaits or reads other state belongs in a thunk,
/// never here.
pub trait Reducer {
    type State: SliceState;

    type Intent: Intent;

    /// Return the state after `intent`. Unhandled intents return `state`.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
