use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    i18n::current::{common, header as t},
    router::Route,
};

#[function_component(Header)]
pub fn header() -> Html {
    let route = use_route::<Route>();
    let nav_link = |target: Route, label: &'static str| {
        let active = route.as_ref() == Some(&target);
        html! {
            <Link<Route>
                to={target}
                classes={classes!("nav-link", active.then_some("nav-link--active"))}
            >
                { label }
            </Link<Route>>
        }
    };

    html! {
        <header class={classes!("site-header", "sticky", "top-0", "z-30", "backdrop-blur")}>
            <div class={classes!("mx-auto", "flex", "max-w-6xl", "items-center", "justify-between", "px-4", "py-3")}>
                <Link<Route> to={Route::Home} classes={classes!("brand", "flex", "flex-col")}>
                    <span class="brand-name">{ common::BRAND_NAME }</span>
                    <span class="brand-tagline">{ common::BRAND_TAGLINE }</span>
                </Link<Route>>
                <nav class={classes!("flex", "gap-4")} aria-label={t::NAV_MAIN_ARIA}>
                    { nav_link(Route::Home, t::NAV_HOME) }
                    { nav_link(Route::Archive, t::NAV_ARCHIVE) }
                </nav>
            </div>
        </header>
    }
}
