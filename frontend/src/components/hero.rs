use scicover_shared::{split_paragraphs, ArticleDetail, ArticleIndexEntry};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{cover_image::CoverImage, markdown_block::MarkdownBlock},
    hooks::LoadState,
    i18n::current::{common, home as t},
    router::Route,
    utils::format_issue_date,
};

#[derive(Properties, PartialEq)]
pub struct HeroStoryProps {
    pub entry: ArticleIndexEntry,
    /// Detail of `entry`; the lead paragraph shows once it arrives.
    pub detail: LoadState<ArticleDetail>,
}

/// The newest cover story, shown large above the grid.
#[function_component(HeroStory)]
pub fn hero_story(props: &HeroStoryProps) -> Html {
    let entry = &props.entry;
    let detail_route = Route::ArticleDetail {
        id: entry.id.clone(),
    };

    let lead = match &props.detail {
        LoadState::Ready(detail) => split_paragraphs(&detail.cover_story.summary.zh)
            .into_iter()
            .next()
            .map(|paragraph| {
                html! {
                    <MarkdownBlock
                        markdown={paragraph}
                        class={classes!("hero-lead", "line-clamp-4")}
                    />
                }
            })
            .unwrap_or_default(),
        // The hero stays usable without its detail document.
        LoadState::Loading | LoadState::Failed(_) => html! {},
    };

    html! {
        <section class={classes!("hero-story", "grid", "gap-8", "md:grid-cols-[2fr_3fr]")}>
            <Link<Route> to={detail_route.clone()} classes={classes!("hero-cover")}>
                <CoverImage
                    src={entry.cover_url.clone()}
                    journal={entry.journal.clone()}
                    alt={entry.title_en.clone()}
                    class={classes!("w-full", "rounded-2xl", "object-cover")}
                    eager=true
                />
            </Link<Route>>
            <div class={classes!("flex", "flex-col", "gap-4", "justify-center")}>
                <p class="hero-kicker">
                    { t::HERO_LABEL }{ " · " }{ &entry.journal }{ " · " }{ format_issue_date(&entry.date) }
                </p>
                <h1 class="hero-title">{ &entry.title_zh }</h1>
                <p class="hero-subtitle" lang="en">{ &entry.title_en }</p>
                { lead }
                <Link<Route> to={detail_route} classes={classes!("btn-fluent-primary", "self-start")}>
                    { t::READ_MORE }{ " " }{ common::ARROW_RIGHT }
                </Link<Route>>
            </div>
        </section>
    }
}
