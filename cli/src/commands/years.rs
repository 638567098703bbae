//! `years`: the archive facets.

use anyhow::{Context, Result};
use scicover_shared::{
    facets::{available_years, months_with_data},
    DocumentCache, Selection,
};
use serde::Serialize;

use super::print_json;

/// Months with data in one year.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct YearFacet {
    /// Calendar year.
    pub year: i32,
    /// Calendar months, 1-12, ascending.
    pub months: Vec<u32>,
}

/// Facets of an index, most recent year first.
pub fn year_facets(index: &scicover_shared::ArticleIndex) -> Vec<YearFacet> {
    available_years(index)
        .into_iter()
        .map(|year| YearFacet {
            year,
            months: months_with_data(index, Selection::Only(year))
                .into_iter()
                .map(|month| month + 1)
                .collect(),
        })
        .collect()
}

/// Print every year with data and its months.
pub async fn run(cache: &DocumentCache) -> Result<()> {
    let index = cache
        .load_index()
        .await
        .with_context(|| format!("index at {}", cache.assets().index_url()))?;
    print_json(&year_facets(&index))
}
