//! Thunks for the counter slice.
//!
//! A thunk reads the store, may await, and dispatches intents. Reducers
//! stay pure; everything with an effect lives here.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::store::Store;

use super::fetch::{CountFetcher, FetchError};
use super::intent::CounterIntent;
use super::selectors::select_count;

/// Handle to a fetch started by [`increment_async`].
///
/// The fetch runs on its own tokio task. Awaiting the handle yields the
/// fetched amount; dropping it detaches the task, which still resolves
/// the status.
pub struct PendingFetch {
    handle: JoinHandle<Result<i64, FetchError>>,
    store: Store,
}

impl std::fmt::Debug for PendingFetch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingFetch")
            .field("finished", &self.handle.is_finished())
            .finish()
    }
}

impl Future for PendingFetch {
    type Output = Result<i64, FetchError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.handle).poll(cx).map(|joined| {
            joined.unwrap_or_else(|err| {
                // The task died before it could dispatch a resolution
                let err = FetchError::Interrupted {
                    reason: err.to_string(),
                };
                self.store.dispatch(CounterIntent::FetchRejected {
                    message: err.to_string(),
                });
                Err(err)
            })
        })
    }
}

/// Start adding `amount` after fetching it from `fetcher`.
///
/// Amounts below 1 are rejected with [`FetchError::InvalidAmount`] before
/// anything is dispatched. Otherwise `FetchPending` is dispatched before
/// this function returns, so `Loading` is visible immediately and always
/// before the resolution. The fetch then runs on a spawned task that
/// dispatches `FetchFulfilled` or `FetchRejected`.
///
/// Must be called from within a tokio runtime.
pub fn increment_async<F>(
    store: &Store,
    fetcher: Arc<F>,
    amount: i64,
) -> Result<PendingFetch, FetchError>
where
    F: CountFetcher + ?Sized + 'static,
{
    if amount < 1 {
        warn!(amount, "rejecting non-positive async amount");
        return Err(FetchError::InvalidAmount { amount });
    }

    store.dispatch(CounterIntent::FetchPending);
    debug!(amount, fetcher = fetcher.name(), "count fetch started");

    let task_store = store.clone();
    let handle = tokio::spawn(async move {
        match fetcher.fetch_count(amount).await {
            Ok(fetched) => {
                task_store.dispatch(CounterIntent::FetchFulfilled { amount: fetched });
                debug!(fetched, "count fetch fulfilled");
                Ok(fetched)
            }
            Err(err) => {
                warn!(amount, error = %err, "count fetch failed");
                task_store.dispatch(CounterIntent::FetchRejected {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    });

    Ok(PendingFetch {
        handle,
        store: store.clone(),
    })
}

/// Add `amount` only if the current value is odd.
///
/// Odd means `value % 2 == 1`, so negative values never qualify.
/// Returns `true` when the increment was dispatched.
pub fn increment_if_odd(store: &Store, amount: i64) -> bool {
    let current = select_count(&store.get_state());
    if current % 2 != 1 {
        debug!(current, "value is not odd, skipping increment");
        return false;
    }
    store.dispatch(CounterIntent::IncrementByAmount { amount });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{CounterState, CounterStatus, MockCountFetcher};
    use crate::store::AppState;

    fn store_at(value: i64) -> Store {
        Store::new(AppState {
            counter: CounterState::with_value(value),
        })
    }

    #[test]
    fn if_odd_adds_on_odd_value() {
        let store = store_at(3);
        assert!(increment_if_odd(&store, 10));
        assert_eq!(store.get_state().counter.value, 13);
    }

    #[test]
    fn if_odd_skips_even_value() {
        let store = store_at(4);
        assert!(!increment_if_odd(&store, 10));
        assert_eq!(store.get_state().counter.value, 4);
    }

    #[test]
    fn if_odd_skips_negative_odd_value() {
        let store = store_at(-3);
        assert!(!increment_if_odd(&store, 10));
        assert_eq!(store.get_state().counter.value, -3);
    }

    #[test]
    fn if_odd_leaves_status_alone() {
        let store = store_at(1);
        store.dispatch(CounterIntent::FetchPending);
        increment_if_odd(&store, 1);
        assert_eq!(store.get_state().counter.status, CounterStatus::Loading);
    }

    #[tokio::test]
    async fn zero_amount_is_rejected_without_dispatch() {
        let store = store_at(5);
        let fetcher = Arc::new(MockCountFetcher::default());

        let err = increment_async(&store, fetcher, 0).unwrap_err();

        assert_eq!(err, FetchError::InvalidAmount { amount: 0 });
        assert_eq!(store.get_state().counter, CounterState::with_value(5));
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_handle_still_resolves() {
        let store = store_at(0);
        let fetcher = Arc::new(MockCountFetcher::default());

        drop(increment_async(&store, fetcher, 2).unwrap());
        assert_eq!(store.get_state().counter.status, CounterStatus::Loading);

        tokio::time::sleep(std::time::Duration::from_secs(1)).await;
        assert_eq!(
            store.get_state().counter,
            CounterState {
                value: 2,
                status: CounterStatus::Idle
            }
        );
    }
}
