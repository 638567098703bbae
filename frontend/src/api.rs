use std::{rc::Rc, time::Duration};

use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use js_sys::Date;
use scicover_shared::{
    fetch::{DocumentFetcher, Scheduler},
    AssetResolver, CacheConfig, DocumentCache, FetchError,
};

use crate::config::{BASE_PATH, INDEX_STALE_AFTER_SECS};

/// `GET` through the browser fetch API.
pub struct GlooFetcher;

#[async_trait(?Send)]
impl DocumentFetcher for GlooFetcher {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(format!("{:?}", e)))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        response.text().await.map_err(body_error)
    }
}

/// A body that stops streaming is a transport failure, retried like one.
fn body_error(e: gloo_net::Error) -> FetchError {
    FetchError::Transport(format!("{:?}", e))
}

/// Wall clock from `Date.now()`, tasks on the browser microtask queue.
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn now(&self) -> Duration {
        Duration::from_millis(Date::now() as u64)
    }

    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

/// The document cache for this session.
pub fn build_cache() -> DocumentCache {
    let config = CacheConfig {
        index_stale_after: Duration::from_secs(INDEX_STALE_AFTER_SECS),
        ..CacheConfig::default()
    };
    DocumentCache::with_config(
        Rc::new(GlooFetcher),
        Rc::new(BrowserScheduler),
        AssetResolver::new(BASE_PATH),
        config,
    )
}
