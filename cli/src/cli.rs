//! Command-line arguments.

use clap::{Parser, Subcommand, ValueEnum};
use scicover_shared::Lang;

/// Summary language selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LangArg {
    /// Chinese.
    Zh,
    /// English.
    En,
}

impl From<LangArg> for Lang {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::Zh => Lang::Zh,
            LangArg::En => Lang::En,
        }
    }
}

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(name = "scicover", version, about = "Inspect published SciCover data")]
pub struct Cli {
    /// Site base: an http(s) URL or a local directory containing `data/`.
    #[arg(long, global = true, env = "SCICOVER_DATA_BASE", default_value = ".")]
    pub base: String,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List index entries, newest first.
    Index {
        /// Only entries of this journal (display name or short alias).
        #[arg(long)]
        journal: Option<String>,
    },
    /// Print one article detail document.
    Article {
        /// Article id as listed in the index.
        id: String,
        /// Print only the title and summary paragraphs in this language.
        #[arg(long, value_enum)]
        lang: Option<LangArg>,
    },
    /// List years with articles and the months (1-12) that have data.
    Years,
    /// List articles for an optional year and month, grouped by year.
    Archive {
        /// Calendar year; all years when omitted.
        #[arg(long)]
        year: Option<i32>,
        /// Month 1-12; all months when omitted.
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
    /// Check the index and every detail document; exits non-zero on problems.
    Validate,
}
