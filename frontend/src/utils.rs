use chrono::Datelike;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};
use scicover_shared::{facets::parse_issue_date, AssetResolver};

/// Convert Markdown content into sanitized HTML.
///
/// Relative image paths are resolved against the deployment base; the
/// rendered HTML then goes through `ammonia` since summaries come from an
/// automated pipeline.
pub fn markdown_to_html(content: &str, assets: &AssetResolver) -> String {
    if content.trim().is_empty() {
        return String::new();
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(content, options);

    let transformed_parser = parser.map(|event| match event {
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: CowStr::from(assets.resolve(&dest_url)),
            title,
            id,
        }),
        _ => event,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, transformed_parser);
    ammonia::clean(&html_output)
}

/// `2024-03-05` as `2024年3月5日`; anything the facets cannot date is
/// returned as-is.
pub fn format_issue_date(date: &str) -> String {
    match parse_issue_date(date) {
        Some(day) => format!("{}年{}月{}日", day.year(), day.month(), day.day()),
        None => date.to_string(),
    }
}
