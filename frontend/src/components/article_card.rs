use scicover_shared::ArticleIndexEntry;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{components::cover_image::CoverImage, router::Route, utils::format_issue_date};

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    pub article: ArticleIndexEntry,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    let detail_route = Route::ArticleDetail {
        id: article.id.clone(),
    };

    html! {
        <article class="article-card">
            <Link<Route> to={detail_route.clone()} classes={classes!("featured-image")}>
                <CoverImage
                    src={article.cover_url.clone()}
                    journal={article.journal.clone()}
                    alt={article.title_en.clone()}
                    class={classes!("w-full", "aspect-[3/4]", "object-cover")}
                />
            </Link<Route>>
            <div class="post-meta">
                <span class="post-meta-item journal-badge">{ &article.journal }</span>
                <span class="post-meta-item">
                    <i class="far fa-calendar-alt" aria-hidden="true"></i>
                    { format_issue_date(&article.date) }
                </span>
            </div>
            <h3 class="article-title">
                <Link<Route> to={detail_route} classes={classes!("article-title-link")}>
                    { &article.title_zh }
                </Link<Route>>
            </h3>
            <p class="article-subtitle" lang="en">{ &article.title_en }</p>
        </article>
    }
}
