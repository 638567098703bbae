//! SciCover web front-end: home, article detail and archive views over the
//! published JSON documents.

mod api;
mod cache_context;
mod components;
mod config;
mod hooks;
mod i18n;
mod pages;
mod router;
mod utils;

use yew::prelude::*;

use crate::cache_context::DocumentCacheProvider;

#[function_component(App)]
fn app() -> Html {
    html! {
        <DocumentCacheProvider>
            <router::AppRouter />
        </DocumentCacheProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
