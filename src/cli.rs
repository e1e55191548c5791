//! Command-line surface: argument parsing and the command runner.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use clap::Parser;
use thiserror::Error;
use tracing::info;

use crate::counter::{increment_async, increment_if_odd, CountFetcher, CounterIntent, FetchError};
use crate::store::{AppState, Store};

#[derive(Debug, Parser)]
#[command(name = "counter-slice")]
#[command(about = "Drive the counter store with a sequence of commands", long_about = None)]
pub struct Cli {
    /// Path to a config file (default: ~/.config/counter-slice/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the simulated fetch latency in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,

    /// Commands to run in order: inc, dec, add:N, async[:N], odd:N
    #[arg(required = true)]
    pub commands: Vec<Command>,
}

/// One step the runner applies to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Increment,
    Decrement,
    Add(i64),
    /// `None` uses the configured default amount.
    Async(Option<i64>),
    IfOdd(i64),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("Unknown command '{0}'")]
    Unknown(String),

    #[error("Command '{command}' requires an amount")]
    MissingAmount { command: String },

    #[error("Invalid amount '{value}' for '{command}'")]
    InvalidAmount { command: String, value: String },
}

fn parse_amount(command: &str, value: &str) -> Result<i64, CommandParseError> {
    value.parse().map_err(|_| CommandParseError::InvalidAmount {
        command: command.to_string(),
        value: value.to_string(),
    })
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        let required = |arg: Option<&str>| {
            arg.ok_or_else(|| CommandParseError::MissingAmount {
                command: name.to_string(),
            })
            .and_then(|value| parse_amount(name, value))
        };

        match name {
            "inc" if arg.is_none() => Ok(Command::Increment),
            "dec" if arg.is_none() => Ok(Command::Decrement),
            "add" => required(arg).map(Command::Add),
            "odd" => required(arg).map(Command::IfOdd),
            "async" => match arg {
                Some(value) => parse_amount(name, value).map(|n| Command::Async(Some(n))),
                None => Ok(Command::Async(None)),
            },
            _ => Err(CommandParseError::Unknown(s.to_string())),
        }
    }
}

/// Apply `commands` in order and return the final state.
///
/// Async commands are awaited before the next command runs. The first
/// fetch failure stops the run; the store keeps the `Failed` status. A
/// non-positive async amount also stops the run, leaving the store as is.
pub async fn run_commands<F>(
    store: &Store,
    fetcher: Arc<F>,
    commands: &[Command],
    default_async_amount: i64,
) -> Result<AppState, FetchError>
where
    F: CountFetcher + ?Sized + 'static,
{
    for command in commands {
        info!(?command, "running command");
        match *command {
            Command::Increment => {
                store.dispatch(CounterIntent::Increment);
            }
            Command::Decrement => {
                store.dispatch(CounterIntent::Decrement);
            }
            Command::Add(amount) => {
                store.dispatch(CounterIntent::IncrementByAmount { amount });
            }
            Command::Async(amount) => {
                let amount = amount.unwrap_or(default_async_amount);
                increment_async(store, Arc::clone(&fetcher), amount)?.await?;
            }
            Command::IfOdd(amount) => {
                increment_if_odd(store, amount);
            }
        }
    }
    Ok(store.get_state())
}

/// Render the state as a single human-readable line.
pub fn format_state(state: &AppState) -> String {
    format!("value={} status={}", state.counter.value, state.counter.status)
}
