use serde::{Deserialize, Serialize};

use crate::counter::{DEFAULT_FETCH_AMOUNT, DEFAULT_FETCH_DELAY};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Settings for the counter slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Value the counter starts at (default: 0).
    #[serde(default)]
    pub initial_value: i64,
}

/// Settings for the mock count fetcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Simulated latency in milliseconds (default: 500).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Amount used by `async` without an explicit number (default: 1).
    #[serde(default = "default_async_amount")]
    pub default_async_amount: i64,
}

fn default_delay_ms() -> u64 {
    DEFAULT_FETCH_DELAY.as_millis() as u64
}

fn default_async_amount() -> i64 {
    DEFAULT_FETCH_AMOUNT
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            default_async_amount: default_async_amount(),
        }
    }
}

impl FetchConfig {
    pub fn delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.delay_ms)
    }
}
