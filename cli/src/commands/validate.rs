//! `validate`: consistency checks over a data directory.

use std::collections::HashSet;

use anyhow::{bail, Context, Result};
use futures::future::join_all;
use scicover_shared::{facets::entry_date, ArticleIndex, DocumentCache, Journal};
use serde::Serialize;

use super::print_json;

/// One problem found by `validate`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Problem {
    /// The id occurs more than once in the index.
    DuplicateId {
        /// Offending id.
        id: String,
    },
    /// The entry's date is not a `YYYY-MM-DD` calendar date.
    BadDate {
        /// Entry id.
        id: String,
        /// Date as written.
        date: String,
    },
    /// The journal is not one the pipeline covers.
    UnknownJournal {
        /// Entry id.
        id: String,
        /// Journal as written.
        journal: String,
    },
    /// The detail document could not be loaded.
    DetailUnavailable {
        /// Entry id.
        id: String,
        /// Load failure reason.
        reason: String,
    },
}

/// Printed by `validate`.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Number of index entries checked.
    pub checked: usize,
    /// Everything that failed.
    pub problems: Vec<Problem>,
}

/// Checks that need only the index.
pub fn check_index(index: &ArticleIndex) -> Vec<Problem> {
    let mut problems = index
        .duplicate_ids()
        .into_iter()
        .map(|id| Problem::DuplicateId {
            id: id.to_string(),
        })
        .collect::<Vec<_>>();

    for entry in &index.articles {
        if entry_date(entry).is_none() {
            problems.push(Problem::BadDate {
                id: entry.id.clone(),
                date: entry.date.clone(),
            });
        }
        if Journal::from_name(&entry.journal).is_none() {
            problems.push(Problem::UnknownJournal {
                id: entry.id.clone(),
                journal: entry.journal.clone(),
            });
        }
    }
    problems
}

/// Load every detail document concurrently and report the failures.
pub async fn check_details(cache: &DocumentCache, index: &ArticleIndex) -> Vec<Problem> {
    let loads = index.articles.iter().map(|entry| async move {
        cache.load_article(&entry.id).await.err().map(|err| Problem::DetailUnavailable {
            id: entry.id.clone(),
            reason: err.to_string(),
        })
    });

    // Duplicated ids share one load but would be reported once per entry.
    let mut seen = HashSet::new();
    join_all(loads)
        .await
        .into_iter()
        .flatten()
        .filter(|problem| seen.insert(problem.clone()))
        .collect()
}

/// Validate the index and every detail document it points at.
pub async fn run(cache: &DocumentCache) -> Result<()> {
    let index = cache
        .load_index()
        .await
        .with_context(|| format!("index at {}", cache.assets().index_url()))?;

    let mut problems = check_index(&index);
    problems.extend(check_details(cache, &index).await);

    for problem in &problems {
        tracing::warn!(?problem, "validation problem");
    }
    print_json(&Report {
        checked: index.articles.len(),
        problems: problems.clone(),
    })?;

    if !problems.is_empty() {
        bail!("{} problem(s) found", problems.len());
    }
    tracing::info!(articles = index.articles.len(), "data is consistent");
    Ok(())
}
