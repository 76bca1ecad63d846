//! Command-line entry point for the resale cost calculator.

mod cmd;
mod report;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = cmd::Cli::parse();
    cmd::run(cli)
}
