//! Slice state marker.

/// State held by one slice of the store.
///
/// The store hands out copies of the whole state on every read, so a slice
/// state is a small value type: `Default` is its initial value and
/// `PartialEq` lets subscribers and tests compare snapshots.
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}
