//! `index`: the article list.

use anyhow::{Context, Result};
use scicover_shared::{facets::filter_by_journal, ArticleIndexEntry, DocumentCache, Journal};
use serde::Serialize;

use super::print_json;

/// Printed by `index`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexListing<'a> {
    /// When the pipeline last rebuilt the index.
    pub last_updated: &'a str,
    /// Number of listed entries.
    pub total: usize,
    /// Listed entries, in index order.
    pub articles: Vec<&'a ArticleIndexEntry>,
}

/// Journal filter as typed by the user: a known alias maps to its display
/// name, anything else is matched verbatim.
pub fn journal_filter(raw: &str) -> String {
    Journal::from_name(raw)
        .map(|journal| journal.name().to_string())
        .unwrap_or_else(|| raw.trim().to_string())
}

/// Print the index, optionally restricted to one journal.
pub async fn run(cache: &DocumentCache, journal: Option<&str>) -> Result<()> {
    let index = cache
        .load_index()
        .await
        .with_context(|| format!("index at {}", cache.assets().index_url()))?;
    let journal = journal.map(journal_filter);
    let articles = filter_by_journal(&index.articles, journal.as_deref());
    if articles.is_empty() {
        tracing::warn!(journal = journal.as_deref().unwrap_or("*"), "no matching articles");
    }

    print_json(&IndexListing {
        last_updated: &index.last_updated,
        total: articles.len(),
        articles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_to_display_names() {
        assert_eq!(journal_filter("asr"), "American Sociological Review");
        assert_eq!(journal_filter(" nature "), "Nature");
        assert_eq!(journal_filter("Annals of Improbable Research"), "Annals of Improbable Research");
    }
}
