use scicover_shared::{split_paragraphs, ArticleDetail, BilingualText, Lang, SummaryMode};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        cover_image::CoverImage,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        markdown_block::MarkdownBlock,
    },
    hooks::{use_article, use_article_index, use_scroll_to_top, LoadState},
    i18n::{current::article_detail as t, fill_one, fill_two},
    pages::not_found::NotFoundPage,
    router::Route,
    utils::format_issue_date,
};

#[derive(Properties, Clone, PartialEq)]
pub struct ArticleDetailProps {
    pub id: String,
}

#[function_component(ArticleDetailPage)]
pub fn article_detail_page(props: &ArticleDetailProps) -> Html {
    use_scroll_to_top();
    // The detail query looks its path up in the index, so the index loads
    // first and its failure is reported as such.
    let index = use_article_index();
    let article = use_article(Some(props.id.clone()));
    // `None` shows both languages.
    let lang = use_state(|| None::<Lang>);

    let on_lang = {
        let lang = lang.clone();
        Callback::from(move |next: Option<Lang>| lang.set(next))
    };

    match (&article, &index) {
        (LoadState::Ready(article), _) => {
            html! { <ArticleView article={article.clone()} lang={*lang} {on_lang} /> }
        },
        (LoadState::Failed(error), _) | (LoadState::Loading, LoadState::Failed(error)) => {
            html! { <NotFoundPage reason={AttrValue::Static(error.message())} /> }
        },
        (LoadState::Loading, _) => html! { <LoadingSpinner size={SpinnerSize::Large} /> },
    }
}

#[derive(Properties, PartialEq)]
struct ArticleViewProps {
    article: std::rc::Rc<ArticleDetail>,
    lang: Option<Lang>,
    on_lang: Callback<Option<Lang>>,
}

#[function_component(ArticleView)]
fn article_view(props: &ArticleViewProps) -> Html {
    let article = &props.article;
    let story = &article.cover_story;
    let shows = |lang: Lang| props.lang.map_or(true, |only| only == lang);

    let lang_button = |label: &'static str, value: Option<Lang>| {
        let active = props.lang == value;
        let onclick = {
            let on_lang = props.on_lang.clone();
            Callback::from(move |_: MouseEvent| on_lang.emit(value))
        };
        html! {
            <button
                type="button"
                class={classes!("lang-toggle", active.then_some("lang-toggle--active"))}
                aria-pressed={active.to_string()}
                {onclick}
            >
                { label }
            </button>
        }
    };

    let issue_line = match (article.volume.trim(), article.issue.trim()) {
        ("", "") => String::new(),
        (volume, issue) => fill_two(t::ISSUE_TEMPLATE, volume, issue),
    };

    let mode_badge = match article.summary_mode {
        Some(SummaryMode::FullText) => html! { <span class="mode-badge">{ t::MODE_FULL_TEXT }</span> },
        Some(SummaryMode::AbstractOnly) => {
            html! { <span class="mode-badge mode-badge--abstract">{ t::MODE_ABSTRACT_ONLY }</span> }
        },
        None => html! {},
    };

    let key = &story.key_article;
    let links = [
        (t::LINK_OFFICIAL, Some(story.links.official.as_str())),
        (t::LINK_DOI, Some(story.links.doi.as_str())),
        (t::LINK_PREPRINT, story.links.preprint.as_deref()),
    ];
    let links = links
        .into_iter()
        .filter_map(|(label, href)| href.filter(|href| !href.trim().is_empty()).map(|href| (label, href)))
        .collect::<Vec<_>>();

    html! {
        <main class={classes!("article-detail", "mx-auto", "max-w-4xl", "px-4", "py-8", "flex", "flex-col", "gap-8")}>
            <Link<Route> to={Route::Home} classes={classes!("back-link")}>
                { "← " }{ t::BACK }
            </Link<Route>>

            <header class={classes!("grid", "gap-6", "md:grid-cols-[1fr_2fr]")}>
                <figure>
                    <CoverImage
                        src={Some(article.cover_image.url.clone())}
                        journal={article.journal.clone()}
                        alt={story.title.en.clone()}
                        class={classes!("w-full", "rounded-2xl", "object-cover")}
                        eager=true
                    />
                    if !article.cover_image.credit.is_empty() {
                        <figcaption class="cover-credit">
                            { fill_one(t::COVER_CREDIT_TEMPLATE, &article.cover_image.credit) }
                        </figcaption>
                    }
                </figure>
                <div class={classes!("flex", "flex-col", "gap-3")}>
                    <p class="article-kicker">
                        { &article.journal }{ " · " }{ format_issue_date(&article.date) }
                        if !issue_line.is_empty() {
                            { " · " }{ issue_line }
                        }
                    </p>
                    if shows(Lang::Zh) {
                        <h1 class="article-title-zh" lang="zh">{ &story.title.zh }</h1>
                    }
                    if shows(Lang::En) {
                        <h2 class="article-title-en" lang="en">{ &story.title.en }</h2>
                    }
                    <div class={classes!("flex", "flex-wrap", "items-center", "gap-2")}>
                        { lang_button(t::LANG_BOTH, None) }
                        { lang_button(t::LANG_ZH, Some(Lang::Zh)) }
                        { lang_button(t::LANG_EN, Some(Lang::En)) }
                        { mode_badge }
                    </div>
                </div>
            </header>

            { for [Lang::Zh, Lang::En].into_iter().filter(|lang| shows(*lang)).map(|lang| html! {
                <SummarySection key={lang.code()} text={story.summary.clone()} {lang} />
            }) }

            <section class="key-article">
                <h3>{ t::KEY_ARTICLE }</h3>
                <p class="font-semibold" lang="en">{ &key.title }</p>
                if !key.authors.is_empty() {
                    <p>{ t::AUTHORS }{ ": " }{ key.authors.join(", ") }</p>
                }
                if !key.pages.is_empty() {
                    <p>{ t::PAGES }{ ": " }{ &key.pages }</p>
                }
            </section>

            if !story.images.is_empty() {
                <section class="gallery">
                    <h3>{ t::GALLERY }</h3>
                    <div class={classes!("grid", "gap-4", "sm:grid-cols-2")}>
                        { for story.images.iter().map(|image| html! {
                            <figure key={image.url.clone()}>
                                <CoverImage
                                    src={Some(image.url.clone())}
                                    journal={article.journal.clone()}
                                    alt={image.caption.en.clone()}
                                    class={classes!("w-full", "rounded-xl")}
                                />
                                <figcaption>
                                    if shows(Lang::Zh) { <p lang="zh">{ &image.caption.zh }</p> }
                                    if shows(Lang::En) { <p lang="en">{ &image.caption.en }</p> }
                                </figcaption>
                            </figure>
                        }) }
                    </div>
                </section>
            }

            if !links.is_empty() {
                <section class="story-links">
                    <h3>{ t::LINKS }</h3>
                    <ul class={classes!("flex", "flex-wrap", "gap-4")}>
                        { for links.into_iter().map(|(label, href)| html! {
                            <li key={label}>
                                <a href={href.to_string()} target="_blank" rel="noopener noreferrer">{ label }</a>
                            </li>
                        }) }
                    </ul>
                </section>
            }
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct SummarySectionProps {
    text: BilingualText,
    lang: Lang,
}

#[function_component(SummarySection)]
fn summary_section(props: &SummarySectionProps) -> Html {
    let paragraphs = split_paragraphs(props.text.get(props.lang));

    html! {
        <section class={classes!("summary", "flex", "flex-col", "gap-4")} lang={props.lang.code()}>
            if paragraphs.is_empty() {
                <p class="empty-state">{ t::EMPTY_SUMMARY }</p>
            } else {
                { for paragraphs.into_iter().map(|paragraph| html! {
                    <MarkdownBlock markdown={paragraph} />
                }) }
            }
        </section>
    }
}
