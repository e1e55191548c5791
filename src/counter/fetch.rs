//! Count fetcher used by the async increment.
//!
//! The fetcher stands in for a remote call. `MockCountFetcher` waits a
//! fixed latency and echoes the requested amount back; it never fails.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Amount used when the caller does not provide one.
pub const DEFAULT_FETCH_AMOUNT: i64 = 1;

/// Latency of the mock fetch.
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(500);

/// Errors that can occur while fetching a count.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The source of counts could not be reached.
    #[error("Count source unavailable: {reason}")]
    Unavailable { reason: String },

    /// The requested amount is not positive.
    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: i64 },

    /// The fetch task stopped before it produced a result.
    #[error("Fetch interrupted: {reason}")]
    Interrupted { reason: String },
}

/// Source of amounts for the async increment.
#[async_trait]
pub trait CountFetcher: Send + Sync {
    /// Returns the name of this fetcher for logging.
    fn name(&self) -> &'static str;

    /// Fetch the amount to add to the counter.
    async fn fetch_count(&self, amount: i64) -> Result<i64, FetchError>;
}

/// Mock fetcher: sleeps for `delay`, then resolves with the input amount.
#[derive(Debug, Clone)]
pub struct MockCountFetcher {
    delay: Duration,
}

impl MockCountFetcher {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for MockCountFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_FETCH_DELAY)
    }
}

#[async_trait]
impl CountFetcher for MockCountFetcher {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch_count(&self, amount: i64) -> Result<i64, FetchError> {
        tokio::time::sleep(self.delay).await;
        Ok(amount)
    }
}
