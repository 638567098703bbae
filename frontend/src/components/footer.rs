use yew::prelude::*;

use crate::i18n::current::{common, footer as t};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class={classes!("site-footer", "mt-16", "py-8", "text-center", "text-sm")}>
            <p class="font-semibold">{ common::BRAND_NAME }</p>
            <p class="text-[var(--muted)]">{ t::NOTE }</p>
        </footer>
    }
}
