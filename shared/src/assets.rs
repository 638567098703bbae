//! Mapping of data and image paths to fetchable URLs.

use crate::Journal;

/// Directory under the base path that holds the JSON documents.
const DATA_DIR: &str = "data/";
/// Name of the index document inside [`DATA_DIR`].
const INDEX_FILE: &str = "index.json";
/// Journal whose cover stands in for journals missing from the table.
const DEFAULT_COVER_JOURNAL: Journal = Journal::Science;

/// Fallback cover shipped with the site for `journal`.
fn journal_cover(journal: Journal) -> &'static str {
    match journal {
        Journal::Science => "images/defaults/science.jpg",
        Journal::Nature => "images/defaults/nature.jpg",
        Journal::Cell => "images/defaults/cell.jpg",
        Journal::PoliticalGeography => "images/defaults/political-geography.jpg",
        Journal::InternationalOrganization => "images/defaults/international-organization.jpg",
        Journal::AmericanSociologicalReview => "images/defaults/american-sociological-review.jpg",
    }
}

/// Fallback cover path for a journal display name. Unrecognised names get the
/// default journal's cover.
pub fn default_cover_path(journal_name: &str) -> &'static str {
    journal_cover(Journal::from_name(journal_name).unwrap_or(DEFAULT_COVER_JOURNAL))
}

fn is_absolute_url(path: &str) -> bool {
    let lower = path.get(..8).unwrap_or(path).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Resolves relative asset paths against the deployment base path.
///
/// The base is normalized once to end with exactly one `/`, so a resolved
/// path always has a single separator at the join point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    base: String,
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new("/")
    }
}

impl AssetResolver {
    /// Build a resolver for `base`, which may be a path (`/app`) or a full
    /// origin (`https://host/app/`). An empty base means the site root.
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        Self {
            base: format!("{trimmed}/"),
        }
    }

    /// The normalized base, always ending in `/`.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Map `path` to a fetchable URL. `http(s)://` URLs pass through
    /// untouched; anything else is joined onto the base after dropping one
    /// leading `/`.
    pub fn resolve(&self, path: &str) -> String {
        if is_absolute_url(path) {
            return path.to_string();
        }
        let relative = path.strip_prefix('/').unwrap_or(path);
        format!("{}{}", self.base, relative)
    }

    /// URL of a document path taken from the index.
    pub fn data_url(&self, path: &str) -> String {
        if is_absolute_url(path) {
            return path.to_string();
        }
        let relative = path.strip_prefix('/').unwrap_or(path);
        self.resolve(&format!("{DATA_DIR}{relative}"))
    }

    /// URL of the index document.
    pub fn index_url(&self) -> String {
        self.data_url(INDEX_FILE)
    }

    /// Resolved fallback cover for a journal display name.
    pub fn resolve_default_cover(&self, journal_name: &str) -> String {
        self.resolve(default_cover_path(journal_name))
    }
}
