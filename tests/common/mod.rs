//! Shared test utilities and fake fetchers.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use counter_slice::counter::{CountFetcher, CounterState, FetchError};
use counter_slice::store::{AppState, Store};
use tempfile::TempDir;

/// Store whose counter starts at `value` with `Idle` status.
pub fn store_at(value: i64) -> Store {
    Store::new(AppState {
        counter: CounterState::with_value(value),
    })
}

/// Fetcher that waits `delay` and then always fails.
pub struct FailingFetcher {
    pub delay: Duration,
    pub calls: AtomicUsize,
}

impl FailingFetcher {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountFetcher for FailingFetcher {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn fetch_count(&self, _amount: i64) -> Result<i64, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Err(FetchError::Unavailable {
            reason: "network down".to_string(),
        })
    }
}

/// Fetcher that returns a fixed amount regardless of the request.
pub struct FixedFetcher(pub i64);

#[async_trait]
impl CountFetcher for FixedFetcher {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn fetch_count(&self, _amount: i64) -> Result<i64, FetchError> {
        Ok(self.0)
    }
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
