use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use counter_slice::cli::{format_state, run_commands, Cli};
use counter_slice::config::Config;
use counter_slice::counter::MockCountFetcher;
use counter_slice::logging::init_tracing;
use counter_slice::store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    if let Some(delay_ms) = cli.delay_ms {
        config.fetch.delay_ms = delay_ms;
    }

    let store = Store::from_config(&config);
    let fetcher = Arc::new(MockCountFetcher::new(config.fetch.delay()));

    let result = run_commands(
        &store,
        fetcher,
        &cli.commands,
        config.fetch.default_async_amount,
    )
    .await;

    let state = store.get_state();
    if cli.json {
        println!("{}", serde_json::to_string(&state)?);
    } else {
        println!("{}", format_state(&state));
    }

    result.context("async increment failed")?;
    Ok(())
}
