//! Subcommand implementations. Each prints JSON on stdout; logs go to stderr.

pub mod archive;
pub mod article;
pub mod index;
pub mod validate;
pub mod years;

use anyhow::Result;
use serde::Serialize;

use crate::{
    cli::{Cli, Commands},
    source::DataSource,
};

/// Run the parsed command line against its data source.
pub async fn run(cli: Cli) -> Result<()> {
    let source = DataSource::parse(&cli.base);
    tracing::debug!(?source, "using data source");
    let cache = source.build_cache();
    tracing::debug!(base = cache.assets().base(), "resolving documents");

    match cli.command {
        Commands::Index {
            journal,
        } => index::run(&cache, journal.as_deref()).await,
        Commands::Article {
            id,
            lang,
        } => article::run(&cache, &id, lang.map(Into::into)).await,
        Commands::Years => years::run(&cache).await,
        Commands::Archive {
            year,
            month,
        } => archive::run(&cache, year, month).await,
        Commands::Validate => validate::run(&cache).await,
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
