mod common;

use std::sync::Arc;
use std::time::Duration;

use counter_slice::cli::{format_state, run_commands, Command};
use counter_slice::counter::{CounterStatus, FetchError, MockCountFetcher};
use counter_slice::store::Store;

use common::FailingFetcher;

#[tokio::test(start_paused = true)]
async fn commands_run_in_order() {
    let store = Store::default();
    let fetcher = Arc::new(MockCountFetcher::default());
    let commands = vec![
        Command::Increment,
        Command::Add(2),
        Command::IfOdd(10),
        Command::Async(Some(2)),
        Command::Decrement,
    ];

    let state = run_commands(&store, fetcher, &commands, 1).await.unwrap();

    // 0 -> 1 -> 3 -> 13 -> 15 -> 14
    assert_eq!(state.counter.value, 14);
    assert_eq!(state.counter.status, CounterStatus::Idle);
    assert_eq!(format_state(&state), "value=14 status=idle");
}

#[tokio::test(start_paused = true)]
async fn async_without_amount_uses_default() {
    let store = Store::default();
    let fetcher = Arc::new(MockCountFetcher::new(Duration::ZERO));

    let state = run_commands(&store, fetcher, &[Command::Async(None)], 3)
        .await
        .unwrap();

    assert_eq!(state.counter.value, 3);
}

#[tokio::test(start_paused = true)]
async fn fetch_failure_stops_the_run() {
    let store = Store::default();
    let fetcher = Arc::new(FailingFetcher::new(Duration::from_millis(10)));
    let commands = vec![Command::Increment, Command::Async(Some(5)), Command::Increment];

    let err = run_commands(&store, fetcher, &commands, 1)
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Unavailable { .. }));
    let state = store.get_state();
    assert_eq!(state.counter.value, 1);
    assert_eq!(state.counter.status, CounterStatus::Failed);
}

#[tokio::test]
async fn async_zero_stops_the_run_without_loading() {
    let store = Store::default();
    let fetcher = Arc::new(MockCountFetcher::new(Duration::ZERO));
    let commands = vec![Command::Increment, Command::Async(Some(0)), Command::Increment];

    let err = run_commands(&store, fetcher, &commands, 1)
        .await
        .unwrap_err();

    assert_eq!(err, FetchError::InvalidAmount { amount: 0 });
    let state = store.get_state();
    assert_eq!(state.counter.value, 1);
    assert_eq!(state.counter.status, CounterStatus::Idle);
}
