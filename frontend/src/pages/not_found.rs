use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found as t, router::Route};

#[derive(Properties, PartialEq)]
pub struct NotFoundPageProps {
    /// Why the page could not be shown, when a load failed.
    #[prop_or_default]
    pub reason: Option<AttrValue>,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(props: &NotFoundPageProps) -> Html {
    html! {
        <main class={classes!("mx-auto", "max-w-2xl", "px-4", "py-16", "text-center")}>
            <h2>{ t::TITLE }</h2>
            <p>{ props.reason.as_deref().unwrap_or(t::DESCRIPTION) }</p>
            <Link<Route> to={Route::Home} classes={classes!("btn-fluent-primary", "mt-6", "inline-block")}>
                { t::BACK_HOME }
            </Link<Route>>
        </main>
    }
}
