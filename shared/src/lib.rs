//! Data contracts and the loading/filtering core shared by the SciCover
//! frontend and CLI.
//!
//! The published data set is two kinds of static JSON document: one
//! [`ArticleIndex`] and one [`ArticleDetail`] per cover story. Everything in
//! this crate is platform neutral; the network and the task executor are
//! supplied through the [`fetch::DocumentFetcher`] and [`fetch::Scheduler`]
//! traits.

pub mod assets;
pub mod cache;
pub mod error;
pub mod facets;
pub mod fetch;
pub mod image;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub use assets::{default_cover_path, AssetResolver};
pub use cache::{CacheConfig, DocumentCache};
pub use error::{FetchError, LoadError, LoadErrorKind};
pub use facets::{ArchiveSelection, Selection};

/// One language of a bilingual text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Chinese.
    Zh,
    /// English.
    En,
}

impl Lang {
    /// Short code used in JSON and on the command line.
    pub fn code(self) -> &'static str {
        match self {
            Lang::Zh => "zh",
            Lang::En => "en",
        }
    }
}

/// Chinese and English renditions of the same text. Either side may be empty;
/// there is no fallback from one language to the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualText {
    /// Chinese text.
    #[serde(default)]
    pub zh: String,
    /// English text.
    #[serde(default)]
    pub en: String,
}

impl BilingualText {
    /// The text for `lang`.
    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::Zh => &self.zh,
            Lang::En => &self.en,
        }
    }
}

/// Summary record for one article, as listed in `data/index.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleIndexEntry {
    /// Stable identifier, also the route parameter of the detail page.
    pub id: String,
    /// Journal display name.
    pub journal: String,
    /// ISO-8601 issue date (`YYYY-MM-DD`).
    pub date: String,
    /// Detail document path, relative to the `data/` directory.
    pub path: String,
    /// Chinese title.
    pub title_zh: String,
    /// English title.
    pub title_en: String,
    /// Cover thumbnail, relative to the site root or absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

/// The single manifest listing every published article.
///
/// Entries are newest-first by convention of the pipeline that writes the
/// file. Nothing here re-sorts them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleIndex {
    /// When the pipeline last rebuilt the index. Informational only.
    #[serde(default)]
    pub last_updated: String,
    /// Article summaries in publication order.
    #[serde(default)]
    pub articles: Vec<ArticleIndexEntry>,
}

impl ArticleIndex {
    /// Look up an entry by id.
    pub fn find(&self, id: &str) -> Option<&ArticleIndexEntry> {
        self.articles.iter().find(|entry| entry.id == id)
    }

    /// The hero article: the first entry.
    pub fn hero(&self) -> Option<&ArticleIndexEntry> {
        self.articles.first()
    }

    /// Every entry after the hero.
    pub fn rest(&self) -> &[ArticleIndexEntry] {
        self.articles.get(1..).unwrap_or_default()
    }

    /// Ids that occur more than once, in first-duplicate order.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for entry in &self.articles {
            if !seen.insert(entry.id.as_str()) && !duplicates.contains(&entry.id.as_str()) {
                duplicates.push(entry.id.as_str());
            }
        }
        duplicates
    }
}

/// Cover image of an issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverImage {
    /// Image location, relative or absolute.
    pub url: String,
    /// Photographer or illustrator credit.
    #[serde(default)]
    pub credit: String,
}

/// The research article the cover story is about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyArticle {
    /// Original article title.
    pub title: String,
    /// Author names in byline order.
    #[serde(default)]
    pub authors: Vec<String>,
    /// DOI, without the resolver prefix.
    #[serde(default)]
    pub doi: String,
    /// Page range, e.g. `123-127`.
    #[serde(default)]
    pub pages: String,
}

/// One captioned figure of the story gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Image location, relative or absolute.
    pub url: String,
    /// Bilingual caption.
    #[serde(default)]
    pub caption: BilingualText,
}

/// Outbound links for a story.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryLinks {
    /// Journal page of the article.
    #[serde(default)]
    pub official: String,
    /// DOI resolver link.
    #[serde(default)]
    pub doi: String,
    /// Preprint, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preprint: Option<String>,
}

/// The summarised cover story.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverStory {
    /// Headline.
    pub title: BilingualText,
    /// Summary; paragraphs are separated by blank lines.
    pub summary: BilingualText,
    /// The article behind the cover.
    pub key_article: KeyArticle,
    /// Captioned figures.
    #[serde(default)]
    pub images: Vec<GalleryImage>,
    /// Outbound links.
    #[serde(default)]
    pub links: StoryLinks,
}

/// Whether the summary was written from the full text or the abstract alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryMode {
    /// Summarised from the full article text.
    FullText,
    /// Summarised from the abstract only.
    AbstractOnly,
}

/// Full record for one article, stored at `data/<path>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetail {
    /// Same id as the index entry pointing at this document.
    pub id: String,
    /// Journal display name.
    pub journal: String,
    /// Volume number as printed.
    #[serde(default)]
    pub volume: String,
    /// Issue number as printed.
    #[serde(default)]
    pub issue: String,
    /// ISO-8601 issue date.
    pub date: String,
    /// Cover image of the issue.
    pub cover_image: CoverImage,
    /// The summarised story.
    pub cover_story: CoverStory,
    /// Source of the summary, when the pipeline recorded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_mode: Option<SummaryMode>,
}

/// The journals the pipeline covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Journal {
    /// *Science*.
    Science,
    /// *Nature*.
    Nature,
    /// *Cell*.
    Cell,
    /// *Political Geography*.
    PoliticalGeography,
    /// *International Organization*.
    InternationalOrganization,
    /// *American Sociological Review*.
    AmericanSociologicalReview,
}

impl Journal {
    /// Every journal, natural sciences first.
    pub const ALL: [Journal; 6] = [
        Journal::Science,
        Journal::Nature,
        Journal::Cell,
        Journal::PoliticalGeography,
        Journal::InternationalOrganization,
        Journal::AmericanSociologicalReview,
    ];

    /// Display name, as written in the `journal` fields.
    pub fn name(self) -> &'static str {
        match self {
            Journal::Science => "Science",
            Journal::Nature => "Nature",
            Journal::Cell => "Cell",
            Journal::PoliticalGeography => "Political Geography",
            Journal::InternationalOrganization => "International Organization",
            Journal::AmericanSociologicalReview => "American Sociological Review",
        }
    }

    /// Parse a display name or a short alias, ignoring case and surrounding
    /// whitespace.
    pub fn from_name(name: &str) -> Option<Journal> {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "polgeog" => return Some(Journal::PoliticalGeography),
            "intorg" => return Some(Journal::InternationalOrganization),
            "asr" => return Some(Journal::AmericanSociologicalReview),
            _ => {},
        }
        Journal::ALL
            .into_iter()
            .find(|journal| journal.name().eq_ignore_ascii_case(&normalized))
    }
}

/// Split a summary into paragraphs on blank lines. Paragraphs are trimmed and
/// empty ones dropped.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n").trim().to_string());
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n").trim().to_string());
    }
    paragraphs
}

/// The newest entry of each journal, in index order.
pub fn latest_per_journal(index: &ArticleIndex) -> Vec<&ArticleIndexEntry> {
    let mut seen = HashSet::new();
    index
        .articles
        .iter()
        .filter(|entry| seen.insert(entry.journal.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_JSON: &str = r#"{
        "id": "nature-2024-03-05",
        "journal": "Nature",
        "volume": "627",
        "issue": "8002",
        "date": "2024-03-05",
        "coverImage": { "url": "images/nature-2024-03-05.jpg", "credit": "Jane Doe" },
        "coverStory": {
            "title": { "zh": "深海的光", "en": "Light in the Deep" },
            "summary": { "zh": "第一段\n\n第二段", "en": "First.\n\nSecond." },
            "keyArticle": {
                "title": "Bioluminescence at depth",
                "authors": ["A. Author", "B. Author"],
                "doi": "10.1038/s41586-024-00001-1",
                "pages": "100-105"
            },
            "images": [
                { "url": "https://cdn.example/fig1.png", "caption": { "zh": "图一", "en": "Figure 1" } }
            ],
            "links": {
                "official": "https://www.nature.com/articles/x",
                "doi": "https://doi.org/10.1038/s41586-024-00001-1"
            }
        },
        "summaryMode": "full-text"
    }"#;

    fn entry(id: &str, journal: &str, date: &str) -> ArticleIndexEntry {
        ArticleIndexEntry {
            id: id.to_string(),
            journal: journal.to_string(),
            date: date.to_string(),
            path: format!("{id}.json"),
            title_zh: String::new(),
            title_en: String::new(),
            cover_url: None,
        }
    }

    #[test]
    fn index_reads_published_field_names() {
        let json = r#"{
            "lastUpdated": "2024-03-06T02:00:00Z",
            "articles": [
                { "id": "a1", "journal": "Nature", "date": "2024-03-05", "path": "a1.json",
                  "title_zh": "标题", "title_en": "Title", "cover_url": "images/a1.jpg" },
                { "id": "a2", "journal": "Cell", "date": "2023-11-20", "path": "a2.json",
                  "title_zh": "", "title_en": "" }
            ]
        }"#;
        let index: ArticleIndex = serde_json::from_str(json).expect("parse index");
        assert_eq!(index.last_updated, "2024-03-06T02:00:00Z");
        assert_eq!(index.articles.len(), 2);
        assert_eq!(index.articles[0].cover_url.as_deref(), Some("images/a1.jpg"));
        assert_eq!(index.articles[1].cover_url, None);
        assert_eq!(index.hero().map(|e| e.id.as_str()), Some("a1"));
        assert_eq!(index.rest().len(), 1);
        assert_eq!(index.find("a2").map(|e| e.journal.as_str()), Some("Cell"));
        assert!(index.find("a3").is_none());
    }

    #[test]
    fn detail_reads_nested_story() {
        let detail: ArticleDetail = serde_json::from_str(DETAIL_JSON).expect("parse detail");
        assert_eq!(detail.cover_image.credit, "Jane Doe");
        assert_eq!(detail.cover_story.key_article.authors.len(), 2);
        assert_eq!(detail.cover_story.images[0].caption.get(Lang::En), "Figure 1");
        assert_eq!(detail.cover_story.links.preprint, None);
        assert_eq!(detail.summary_mode, Some(SummaryMode::FullText));
    }

    #[test]
    fn detail_without_summary_mode_is_unknown() {
        let mut json: serde_json::Value = serde_json::from_str(DETAIL_JSON).expect("parse json");
        json.as_object_mut()
            .expect("detail is an object")
            .remove("summaryMode")
            .expect("fixture has summaryMode");
        let detail: ArticleDetail = serde_json::from_value(json).expect("parse detail");
        assert_eq!(detail.summary_mode, None);
        assert_eq!(detail.id, "nature-2024-03-05");
    }

    #[test]
    fn empty_index_has_no_hero() {
        let index = ArticleIndex::default();
        assert!(index.hero().is_none());
        assert!(index.rest().is_empty());
    }

    #[test]
    fn duplicate_ids_reported_once() {
        let index = ArticleIndex {
            last_updated: String::new(),
            articles: vec![
                entry("a", "Nature", "2024-01-01"),
                entry("b", "Cell", "2024-01-01"),
                entry("a", "Nature", "2024-01-01"),
                entry("a", "Nature", "2024-01-01"),
            ],
        };
        assert_eq!(index.duplicate_ids(), vec!["a"]);
    }

    #[test]
    fn split_paragraphs_on_blank_lines() {
        let text = "**Summary:** one\nstill one\n\n  \n**Problem:** two\n\n\n";
        assert_eq!(
            split_paragraphs(text),
            vec!["**Summary:** one\nstill one".to_string(), "**Problem:** two".to_string()]
        );
        assert!(split_paragraphs("   \n\n").is_empty());
    }

    #[test]
    fn journal_names_and_aliases() {
        assert_eq!(Journal::from_name("nature"), Some(Journal::Nature));
        assert_eq!(Journal::from_name(" Political Geography "), Some(Journal::PoliticalGeography));
        assert_eq!(Journal::from_name("ASR"), Some(Journal::AmericanSociologicalReview));
        assert_eq!(Journal::from_name("intorg"), Some(Journal::InternationalOrganization));
        assert_eq!(Journal::from_name("The Lancet"), None);
        for journal in Journal::ALL {
            assert_eq!(Journal::from_name(journal.name()), Some(journal));
        }
    }

    #[test]
    fn latest_per_journal_keeps_first_of_each() {
        let index = ArticleIndex {
            last_updated: String::new(),
            articles: vec![
                entry("n2", "Nature", "2024-02-01"),
                entry("c1", "Cell", "2024-01-20"),
                entry("n1", "Nature", "2024-01-01"),
            ],
        };
        let ids: Vec<_> = latest_per_journal(&index).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["n2", "c1"]);
    }
}
