//! `article`: one detail document.

use anyhow::{Context, Result};
use scicover_shared::{split_paragraphs, DocumentCache, Lang};
use serde::Serialize;

use super::print_json;

/// One language of an article, printed by `article --lang`.
#[derive(Debug, Serialize)]
pub struct ArticleText<'a> {
    /// Article id.
    pub id: &'a str,
    /// Language code.
    pub lang: &'static str,
    /// Headline in that language.
    pub title: &'a str,
    /// Summary paragraphs.
    pub paragraphs: Vec<String>,
}

/// Print the detail document for `id`, or only one language of it.
pub async fn run(cache: &DocumentCache, id: &str, lang: Option<Lang>) -> Result<()> {
    let article = cache
        .load_article(id)
        .await
        .with_context(|| format!("article {id}"))?;

    match lang {
        None => print_json(&*article),
        Some(lang) => {
            let story = &article.cover_story;
            print_json(&ArticleText {
                id: &article.id,
                lang: lang.code(),
                title: story.title.get(lang),
                paragraphs: split_paragraphs(story.summary.get(lang)),
            })
        },
    }
}
