use scicover_shared::{facets::filter_by_journal, latest_per_journal};
use yew::prelude::*;

use crate::{
    components::{
        article_card::ArticleCard,
        error_banner::ErrorBanner,
        hero::HeroStory,
        journal_tabs::JournalTabs,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    hooks::{use_article, use_article_index, LoadState},
    i18n::{current::home as t, fill_one},
};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let index = use_article_index();
    let journal = use_state(|| None::<String>);

    let hero_id = match &index {
        LoadState::Ready(index) => index.hero().map(|entry| entry.id.clone()),
        LoadState::Loading | LoadState::Failed(_) => None,
    };
    let hero_detail = use_article(hero_id);

    let on_select = {
        let journal = journal.clone();
        Callback::from(move |next: Option<String>| journal.set(next))
    };

    let index = match index {
        LoadState::Loading => {
            return html! { <LoadingSpinner size={SpinnerSize::Large} /> };
        },
        LoadState::Failed(error) => {
            return html! {
                <main class={classes!("mx-auto", "max-w-6xl", "px-4", "py-12")}>
                    <ErrorBanner {error} />
                </main>
            };
        },
        LoadState::Ready(index) => index,
    };

    let Some(hero) = index.hero() else {
        return html! {
            <main class={classes!("mx-auto", "max-w-6xl", "px-4", "py-12")}>
                <p class="empty-state">{ t::EMPTY }</p>
            </main>
        };
    };

    let journals = latest_per_journal(&index)
        .into_iter()
        .map(|entry| entry.journal.clone())
        .collect::<Vec<_>>();
    let grid = filter_by_journal(index.rest(), journal.as_deref());

    let grid_body = if grid.is_empty() {
        let message = match journal.as_deref() {
            Some(name) => fill_one(t::EMPTY_JOURNAL_TEMPLATE, name),
            None => t::EMPTY.to_string(),
        };
        html! { <p class="empty-state">{ message }</p> }
    } else {
        html! {
            <div class={classes!("grid", "gap-6", "sm:grid-cols-2", "lg:grid-cols-3")}>
                { for grid.into_iter().map(|entry| html! {
                    <ArticleCard key={entry.id.clone()} article={entry.clone()} />
                }) }
            </div>
        }
    };

    html! {
        <main class={classes!("mx-auto", "flex", "max-w-6xl", "flex-col", "gap-12", "px-4", "py-8")}>
            <HeroStory entry={hero.clone()} detail={hero_detail} />
            <section class={classes!("flex", "flex-col", "gap-6")}>
                <div class={classes!("flex", "flex-wrap", "items-center", "justify-between", "gap-4")}>
                    <h2 class="section-title">{ t::GRID_TITLE }</h2>
                    <JournalTabs journals={journals} selected={(*journal).clone()} {on_select} />
                </div>
                { grid_body }
            </section>
        </main>
    }
}
