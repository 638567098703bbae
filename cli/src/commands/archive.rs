//! `archive`: entries for a year/month selection.

use anyhow::{Context, Result};
use scicover_shared::{
    facets::group_by_year, ArchiveSelection, ArticleIndex, ArticleIndexEntry, DocumentCache,
    Selection,
};
use serde::Serialize;

use super::print_json;

/// Entries of one year.
#[derive(Debug, Serialize)]
pub struct YearGroup<'a> {
    /// Calendar year.
    pub year: i32,
    /// Entries in index order.
    pub articles: Vec<&'a ArticleIndexEntry>,
}

/// Apply `year` and the 1-based `month` the way the archive picker does: a
/// month without data is ignored and all months are listed instead.
pub fn select(index: &ArticleIndex, year: Option<i32>, month: Option<u32>) -> ArchiveSelection {
    let mut selection = ArchiveSelection::default();
    selection.select_year(Selection::from(year));
    if let Some(month) = month {
        let month0 = month.saturating_sub(1);
        if !selection.select_month(index, Selection::Only(month0)) {
            tracing::warn!(month, "no articles in that month, listing all months");
        }
    }
    selection
}

/// Print the matching entries grouped by year.
pub async fn run(cache: &DocumentCache, year: Option<i32>, month: Option<u32>) -> Result<()> {
    let index = cache
        .load_index()
        .await
        .with_context(|| format!("index at {}", cache.assets().index_url()))?;
    let selection = select(&index, year, month);
    let groups = group_by_year(selection.apply(&index))
        .into_iter()
        .map(|(year, articles)| YearGroup {
            year,
            articles,
        })
        .collect::<Vec<_>>();
    print_json(&groups)
}
