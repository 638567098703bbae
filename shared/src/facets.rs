//! Year and month facets over the article index.
//!
//! Everything here is a pure function of the index snapshot. Months are
//! zero-based (`0` = January) throughout.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};

use crate::{ArticleIndex, ArticleIndexEntry};

/// A facet selection: either every value or one concrete value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    /// No restriction.
    #[default]
    All,
    /// Restrict to one value.
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    /// Whether `value` passes this selection.
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Selection::All, Selection::Only)
    }
}

/// Parse an issue date. Accepts `YYYY-MM-DD` optionally followed by a time
/// part, which is ignored.
pub fn parse_issue_date(date: &str) -> Option<NaiveDate> {
    let day = date.trim().get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Calendar date of an entry, see [`parse_issue_date`].
pub fn entry_date(entry: &ArticleIndexEntry) -> Option<NaiveDate> {
    parse_issue_date(&entry.date)
}

fn year_month(entry: &ArticleIndexEntry) -> Option<(i32, u32)> {
    entry_date(entry).map(|date| (date.year(), date.month0()))
}

/// Distinct years present in the index, most recent first.
pub fn available_years(index: &ArticleIndex) -> Vec<i32> {
    let years: BTreeSet<i32> = index
        .articles
        .iter()
        .filter_map(|entry| year_month(entry).map(|(year, _)| year))
        .collect();
    years.into_iter().rev().collect()
}

/// Months (0..=11) that have at least one entry in the selected year, or in
/// any year for [`Selection::All`].
pub fn months_with_data(index: &ArticleIndex, year: Selection<i32>) -> BTreeSet<u32> {
    index
        .articles
        .iter()
        .filter_map(year_month)
        .filter(|(entry_year, _)| year.matches(entry_year))
        .map(|(_, month)| month)
        .collect()
}

/// Entries matching both selections, in index order. With both selections at
/// [`Selection::All`] every entry is returned, including undated ones.
pub fn filter(
    index: &ArticleIndex,
    year: Selection<i32>,
    month: Selection<u32>,
) -> Vec<&ArticleIndexEntry> {
    if year == Selection::All && month == Selection::All {
        return index.articles.iter().collect();
    }
    index
        .articles
        .iter()
        .filter(|entry| {
            year_month(entry).is_some_and(|(entry_year, entry_month)| {
                year.matches(&entry_year) && month.matches(&entry_month)
            })
        })
        .collect()
}

/// Entries of one journal (exact name match), or all of them for `None`.
pub fn filter_by_journal<'a>(
    entries: &'a [ArticleIndexEntry],
    journal: Option<&str>,
) -> Vec<&'a ArticleIndexEntry> {
    entries
        .iter()
        .filter(|entry| journal.map_or(true, |name| entry.journal == name))
        .collect()
}

/// Entries grouped by year, most recent year first. Entries keep their
/// relative order inside a group; undated entries are left out.
pub fn group_by_year<'a, I>(entries: I) -> Vec<(i32, Vec<&'a ArticleIndexEntry>)>
where
    I: IntoIterator<Item = &'a ArticleIndexEntry>,
{
    let mut groups: BTreeMap<i32, Vec<&'a ArticleIndexEntry>> = BTreeMap::new();
    for entry in entries {
        if let Some((year, _)) = year_month(entry) {
            groups.entry(year).or_default().push(entry);
        }
    }
    groups.into_iter().rev().collect()
}

/// Year/month picker state of the archive view.
///
/// Both selectors start at [`Selection::All`]. Choosing another year clears
/// the month so a month picked for one year never carries over to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveSelection {
    year: Selection<i32>,
    month: Selection<u32>,
}

impl ArchiveSelection {
    /// Current year selection.
    pub fn year(&self) -> Selection<i32> {
        self.year
    }

    /// Current month selection.
    pub fn month(&self) -> Selection<u32> {
        self.month
    }

    /// Select a year. A different year resets the month to
    /// [`Selection::All`].
    pub fn select_year(&mut self, year: Selection<i32>) {
        if self.year != year {
            self.year = year;
            self.month = Selection::All;
        }
    }

    /// Select a month. A concrete month without entries in the current year
    /// selection is ignored; returns whether the selection was applied.
    pub fn select_month(&mut self, index: &ArticleIndex, month: Selection<u32>) -> bool {
        if let Selection::Only(value) = month {
            if !months_with_data(index, self.year).contains(&value) {
                return false;
            }
        }
        self.month = month;
        true
    }

    /// Entries matching the current selection.
    pub fn apply<'a>(&self, index: &'a ArticleIndex) -> Vec<&'a ArticleIndexEntry> {
        filter(index, self.year, self.month)
    }
}
