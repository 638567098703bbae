use std::{cell::Cell, rc::Rc};

use scicover_shared::{
    ArticleDetail, ArticleIndex, AssetResolver, DocumentCache, LoadError, LoadErrorKind,
};
use web_sys::{console, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::use_location;

/// Progress of one cached query as seen by a view.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(Rc<T>),
    Failed(LoadError),
}

impl<T> LoadState<T> {
    fn from_cached(cached: Option<Rc<T>>) -> Self {
        cached.map_or(LoadState::Loading, LoadState::Ready)
    }
}

/// Load the article index through the session cache.
///
/// A cached index renders immediately; the query still runs so a stale index
/// gets its background refresh.
#[hook]
pub fn use_article_index() -> LoadState<ArticleIndex> {
    let cache = use_context::<DocumentCache>();
    let state = {
        let cached = cache.as_ref().and_then(DocumentCache::cached_index);
        use_state(move || LoadState::from_cached(cached))
    };

    {
        let state = state.clone();
        use_effect_with(cache, move |cache| {
            let alive = Rc::new(Cell::new(true));
            match cache.clone() {
                Some(cache) => {
                    let alive = alive.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = cache.load_index().await;
                        if !alive.get() {
                            return;
                        }
                        match result {
                            Ok(index) => state.set(LoadState::Ready(index)),
                            Err(e) => {
                                console::error_1(&format!("Failed to fetch index: {}", e).into());
                                state.set(LoadState::Failed(e));
                            },
                        }
                    });
                },
                None => {
                    console::error_1(&"DocumentCacheProvider is missing".into());
                    state.set(LoadState::Failed(LoadErrorKind::IndexUnavailable.into()));
                },
            }
            move || alive.set(false)
        });
    }

    (*state).clone()
}

/// Load one article by id. `None` stays in [`LoadState::Loading`], which lets
/// a view wait for the id to become known.
#[hook]
pub fn use_article(id: Option<String>) -> LoadState<ArticleDetail> {
    let cache = use_context::<DocumentCache>();
    let state = {
        let cached = cache
            .as_ref()
            .zip(id.as_deref())
            .and_then(|(cache, id)| cache.cached_article(id));
        use_state(move || LoadState::from_cached(cached))
    };

    {
        let state = state.clone();
        use_effect_with((cache, id), move |(cache, id)| {
            let alive = Rc::new(Cell::new(true));
            match (cache.clone(), id.clone()) {
                (Some(cache), Some(id)) => {
                    if let Some(article) = cache.cached_article(&id) {
                        state.set(LoadState::Ready(article));
                    } else {
                        state.set(LoadState::Loading);
                        let alive = alive.clone();
                        wasm_bindgen_futures::spawn_local(async move {
                            let result = cache.load_article(&id).await;
                            if !alive.get() {
                                return;
                            }
                            match result {
                                Ok(article) => state.set(LoadState::Ready(article)),
                                Err(e) => {
                                    console::error_1(
                                        &format!("Failed to fetch article {}: {}", id, e).into(),
                                    );
                                    state.set(LoadState::Failed(e));
                                },
                            }
                        });
                    }
                },
                (None, Some(_)) => {
                    state.set(LoadState::Failed(LoadErrorKind::ArticleUnavailable.into()));
                },
                (_, None) => state.set(LoadState::Loading),
            }
            move || alive.set(false)
        });
    }

    (*state).clone()
}

/// Asset resolver of the session cache, or the site root without a provider.
#[hook]
pub fn use_assets() -> AssetResolver {
    use_context::<DocumentCache>()
        .map(|cache| cache.assets().clone())
        .unwrap_or_default()
}

/// Automatically scroll the viewport to the top whenever the current route
/// changes.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
