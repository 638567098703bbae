//! `scicover` binary entry point.

use anyhow::Result;
use clap::Parser;
use scicover_cli::{cli, commands};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Default to info-level logs; override via RUST_LOG if needed.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    // The document cache is single-threaded and spawns its refreshes locally.
    tokio::task::LocalSet::new()
        .run_until(commands::run(cli))
        .await
}
