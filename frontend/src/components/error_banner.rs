use scicover_shared::LoadError;
use yew::prelude::*;

use crate::i18n::current::error_banner as t;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub error: LoadError,
}

/// Inline notice for a failed load. Stays until the view re-renders with
/// data.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div
            class={classes!(
                "error-banner",
                "mx-auto",
                "flex",
                "items-start",
                "gap-3",
                "rounded-2xl",
                "px-5",
                "py-4",
                "text-sm",
                "shadow-xl",
                "w-full",
                "max-w-2xl"
            )}
            role="alert"
            aria-live="assertive"
        >
            <span class="text-2xl" aria-hidden="true">{"⚠️"}</span>
            <div class="flex-1 space-y-1">
                <p class="font-semibold text-base">{ t::TITLE }</p>
                <p>{ props.error.message() }</p>
            </div>
        </div>
    }
}
