use std::rc::Rc;

use scicover_shared::{
    facets::{available_years, entry_date, group_by_year, months_with_data},
    ArchiveSelection, ArticleIndex, Selection,
};
use yew::prelude::*;

use crate::{
    components::{
        archive_picker::ArchivePicker,
        article_card::ArticleCard,
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    hooks::{use_article_index, LoadState},
    i18n::{current::archive as t, fill_one},
};

#[function_component(ArchivePage)]
pub fn archive_page() -> Html {
    match use_article_index() {
        LoadState::Loading => html! { <LoadingSpinner size={SpinnerSize::Large} /> },
        LoadState::Failed(error) => html! {
            <main class={classes!("mx-auto", "max-w-6xl", "px-4", "py-12")}>
                <ErrorBanner {error} />
            </main>
        },
        LoadState::Ready(index) => html! { <ArchiveBrowser {index} /> },
    }
}

#[derive(Properties, PartialEq)]
struct ArchiveBrowserProps {
    index: Rc<ArticleIndex>,
}

#[function_component(ArchiveBrowser)]
fn archive_browser(props: &ArchiveBrowserProps) -> Html {
    let selection = use_state(ArchiveSelection::default);

    let years = use_memo(props.index.clone(), |index| available_years(index));
    let months = use_memo((props.index.clone(), selection.year()), |(index, year)| {
        months_with_data(index, *year)
    });
    let matching = use_memo((props.index.clone(), *selection), |(index, selection)| {
        selection.apply(index).into_iter().cloned().collect::<Vec<_>>()
    });

    let on_year = {
        let selection = selection.clone();
        Callback::from(move |year: Selection<i32>| {
            let mut next = *selection;
            next.select_year(year);
            selection.set(next);
        })
    };
    let on_month = {
        let selection = selection.clone();
        let index = props.index.clone();
        Callback::from(move |month: Selection<u32>| {
            let mut next = *selection;
            if next.select_month(&index, month) {
                selection.set(next);
            }
        })
    };

    let grouped = group_by_year(matching.iter());
    // Only an All/All selection can match entries without a usable date.
    let undated = matching
        .iter()
        .filter(|entry| entry_date(entry).is_none())
        .collect::<Vec<_>>();

    html! {
        <main class={classes!("mx-auto", "flex", "max-w-6xl", "flex-col", "gap-8", "px-4", "py-8")}>
            <h1 class="section-title">{ t::TITLE }</h1>
            <ArchivePicker
                years={(*years).clone()}
                months_with_data={(*months).clone()}
                year={selection.year()}
                month={selection.month()}
                {on_year}
                {on_month}
            />
            <p class="archive-count">{ fill_one(t::COUNT_TEMPLATE, matching.len()) }</p>
            if matching.is_empty() {
                <p class="empty-state">{ t::EMPTY }</p>
            }
            { for grouped.into_iter().map(|(year, group)| html! {
                <section key={year} class={classes!("flex", "flex-col", "gap-4")}>
                    <h2 class="archive-year">{ year }</h2>
                    <div class={classes!("grid", "gap-6", "sm:grid-cols-2", "lg:grid-cols-3")}>
                        { for group.into_iter().map(|entry| html! {
                            <ArticleCard key={entry.id.clone()} article={entry.clone()} />
                        }) }
                    </div>
                </section>
            }) }
            if !undated.is_empty() {
                <section class={classes!("flex", "flex-col", "gap-4")}>
                    <h2 class="archive-year">{ t::UNDATED_TITLE }</h2>
                    <div class={classes!("grid", "gap-6", "sm:grid-cols-2", "lg:grid-cols-3")}>
                        { for undated.into_iter().map(|entry| html! {
                            <ArticleCard key={entry.id.clone()} article={entry.clone()} />
                        }) }
                    </div>
                </section>
            }
        </main>
    }
}
