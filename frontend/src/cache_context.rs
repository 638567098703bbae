use scicover_shared::DocumentCache;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DocumentCacheProviderProps {
    pub children: Html,
}

/// Owns the session's document cache. Built once on mount and dropped with
/// the app.
#[function_component(DocumentCacheProvider)]
pub fn document_cache_provider(props: &DocumentCacheProviderProps) -> Html {
    let cache = use_memo((), |_| crate::api::build_cache());
    html! {
        <ContextProvider<DocumentCache> context={(*cache).clone()}>
            {props.children.clone()}
        </ContextProvider<DocumentCache>>
    }
}
