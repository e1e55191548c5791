//! Model-View-Intent (MVI) primitives shared by every state slice.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Store subscribers
//!    ↑                              │
//!    └──────── thunks ──────────────┘
//! ```
//!
//! - **State**: Plain, cloneable snapshot of one slice
//! - **Intent**: Something that happened (a user command or an async result)
//! - **Reducer**: Pure function that transforms state based on intents
//!
//! Side effects never live in a reducer. They are written as thunks that
//! read a snapshot from the store, await whatever they need, and dispatch
//! further intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;
