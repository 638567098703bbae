//! Session-scoped cache for the index and detail documents.
//!
//! Two queries sit on one fetch primitive. The index has a single key and is
//! served stale-while-revalidate; details are keyed by article id and never
//! go stale. Concurrent requests for the same key share one in-flight
//! operation, and every waiter gets the same result.

use std::{
    cell::RefCell,
    collections::HashMap,
    rc::{Rc, Weak},
    time::Duration,
};

use futures::future::{FutureExt, LocalBoxFuture, Shared};

use crate::{
    fetch::{fetch_json, DocumentFetcher, Scheduler},
    ArticleDetail, ArticleIndex, AssetResolver, LoadError, LoadErrorKind,
};

type SharedLoad<T> = Shared<LocalBoxFuture<'static, Result<Rc<T>, LoadError>>>;

const DEFAULT_INDEX_STALE_AFTER: Duration = Duration::from_secs(5 * 60);
const DEFAULT_RETRY_ATTEMPTS: u32 = 1;

/// Tuning knobs of [`DocumentCache`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// How long a loaded index counts as fresh.
    pub index_stale_after: Duration,
    /// Extra attempts after a transport or status failure.
    pub retry_attempts: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            index_stale_after: DEFAULT_INDEX_STALE_AFTER,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
        }
    }
}

struct IndexSlot {
    value: Rc<ArticleIndex>,
    fetched_at: Duration,
}

#[derive(Default)]
struct CacheState {
    index: Option<IndexSlot>,
    index_in_flight: Option<SharedLoad<ArticleIndex>>,
    articles: HashMap<String, Rc<ArticleDetail>>,
    articles_in_flight: HashMap<String, SharedLoad<ArticleDetail>>,
}

struct CacheInner {
    fetcher: Rc<dyn DocumentFetcher>,
    scheduler: Rc<dyn Scheduler>,
    assets: AssetResolver,
    config: CacheConfig,
    state: RefCell<CacheState>,
}

/// Fetch-and-cache layer for the published documents.
///
/// Cheap to clone; clones share one cache. Construct one per application
/// session and hand it to the views. Equality is identity.
#[derive(Clone)]
pub struct DocumentCache {
    inner: Rc<CacheInner>,
}

impl PartialEq for DocumentCache {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl DocumentCache {
    /// Cache with the default [`CacheConfig`].
    pub fn new(
        fetcher: Rc<dyn DocumentFetcher>,
        scheduler: Rc<dyn Scheduler>,
        assets: AssetResolver,
    ) -> Self {
        Self::with_config(fetcher, scheduler, assets, CacheConfig::default())
    }

    /// Cache with an explicit configuration.
    pub fn with_config(
        fetcher: Rc<dyn DocumentFetcher>,
        scheduler: Rc<dyn Scheduler>,
        assets: AssetResolver,
        config: CacheConfig,
    ) -> Self {
        Self {
            inner: Rc::new(CacheInner {
                fetcher,
                scheduler,
                assets,
                config,
                state: RefCell::new(CacheState::default()),
            }),
        }
    }

    /// The resolver used to build document URLs.
    pub fn assets(&self) -> &AssetResolver {
        &self.inner.assets
    }

    /// The index if one has been loaded, fresh or not.
    pub fn cached_index(&self) -> Option<Rc<ArticleIndex>> {
        let state = self.inner.state.borrow();
        state.index.as_ref().map(|slot| Rc::clone(&slot.value))
    }

    /// A detail document if it has been loaded.
    pub fn cached_article(&self, id: &str) -> Option<Rc<ArticleDetail>> {
        self.inner.state.borrow().articles.get(id).cloned()
    }

    /// Whether the loaded index is past its freshness window. `false` when
    /// nothing is loaded yet.
    pub fn is_index_stale(&self) -> bool {
        let state = self.inner.state.borrow();
        state
            .index
            .as_ref()
            .is_some_and(|slot| self.is_expired(slot.fetched_at))
    }

    fn is_expired(&self, fetched_at: Duration) -> bool {
        self.inner.scheduler.now().saturating_sub(fetched_at) >= self.inner.config.index_stale_after
    }

    /// Load the article index.
    ///
    /// A cached index is returned immediately. When it is stale, one
    /// background refresh is started and the stale value is still returned.
    pub async fn load_index(&self) -> Result<Rc<ArticleIndex>, LoadError> {
        let pending = {
            let mut state = self.inner.state.borrow_mut();
            let cached = state
                .index
                .as_ref()
                .map(|slot| (Rc::clone(&slot.value), slot.fetched_at));

            if let Some((value, fetched_at)) = cached {
                if self.is_expired(fetched_at) && state.index_in_flight.is_none() {
                    let refresh = self.index_request();
                    state.index_in_flight = Some(refresh.clone());
                    drop(state);
                    tracing::debug!("article index is stale, refreshing in background");
                    self.inner.scheduler.spawn_local(refresh.map(|_| ()).boxed_local());
                }
                return Ok(value);
            }

            match state.index_in_flight.as_ref() {
                Some(pending) => {
                    tracing::debug!("joining in-flight index request");
                    pending.clone()
                },
                None => {
                    let pending = self.index_request();
                    state.index_in_flight = Some(pending.clone());
                    pending
                },
            }
        };
        pending.await
    }

    /// Load one article by id.
    ///
    /// The id is looked up in the (cached) index first; an unknown id fails
    /// without any detail request. Loaded details are kept for the session.
    pub async fn load_article(&self, id: &str) -> Result<Rc<ArticleDetail>, LoadError> {
        if let Some(article) = self.cached_article(id) {
            return Ok(article);
        }
        let joined = self.inner.state.borrow().articles_in_flight.get(id).cloned();
        if let Some(pending) = joined {
            tracing::debug!(id, "joining in-flight article request");
            return pending.await;
        }

        let index = self.load_index().await?;
        let Some(entry) = index.find(id) else {
            tracing::debug!(id, "article id is not listed in the index");
            return Err(LoadErrorKind::NotInIndex.into());
        };

        // The index await may have let another caller start the same request.
        let pending = {
            let mut state = self.inner.state.borrow_mut();
            if let Some(article) = state.articles.get(id) {
                return Ok(Rc::clone(article));
            }
            match state.articles_in_flight.get(id) {
                Some(pending) => pending.clone(),
                None => {
                    let pending = self.article_request(id, &entry.path);
                    state.articles_in_flight.insert(id.to_string(), pending.clone());
                    pending
                },
            }
        };
        pending.await
    }

    fn index_request(&self) -> SharedLoad<ArticleIndex> {
        let fetcher = Rc::clone(&self.inner.fetcher);
        let url = self.inner.assets.index_url();
        let retry_attempts = self.inner.config.retry_attempts;
        let cache: Weak<CacheInner> = Rc::downgrade(&self.inner);

        async move {
            tracing::debug!(url = %url, "fetching article index");
            let loaded = match fetch_json::<ArticleIndex>(&*fetcher, &url, retry_attempts).await {
                Ok(index) => Ok(Rc::new(index)),
                Err(err) => {
                    tracing::warn!(url = %url, error = %err, "failed to load article index");
                    Err(LoadError::from(LoadErrorKind::IndexUnavailable))
                },
            };

            if let Some(cache) = cache.upgrade() {
                let mut state = cache.state.borrow_mut();
                state.index_in_flight = None;
                if let Ok(index) = &loaded {
                    state.index = Some(IndexSlot {
                        value: Rc::clone(index),
                        fetched_at: cache.scheduler.now(),
                    });
                }
            }
            loaded
        }
        .boxed_local()
        .shared()
    }

    fn article_request(&self, id: &str, path: &str) -> SharedLoad<ArticleDetail> {
        let fetcher = Rc::clone(&self.inner.fetcher);
        let url = self.inner.assets.data_url(path);
        let retry_attempts = self.inner.config.retry_attempts;
        let cache: Weak<CacheInner> = Rc::downgrade(&self.inner);
        let id = id.to_string();

        async move {
            tracing::debug!(id = %id, url = %url, "fetching article");
            let loaded = match fetch_json::<ArticleDetail>(&*fetcher, &url, retry_attempts).await {
                Ok(detail) if detail.id == id => Ok(Rc::new(detail)),
                Ok(detail) => {
                    tracing::warn!(id = %id, found = %detail.id, url = %url, "article document has another id");
                    Err(LoadError::from(LoadErrorKind::ArticleUnavailable))
                },
                Err(err) => {
                    tracing::warn!(id = %id, url = %url, error = %err, "failed to load article");
                    Err(LoadError::from(LoadErrorKind::ArticleUnavailable))
                },
            };

            if let Some(cache) = cache.upgrade() {
                let mut state = cache.state.borrow_mut();
                state.articles_in_flight.remove(&id);
                if let Ok(detail) = &loaded {
                    state.articles.insert(id, Rc::clone(detail));
                }
            }
            loaded
        }
        .boxed_local()
        .shared()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;

    use super::*;
    use crate::{fetch::TokioScheduler, FetchError};

    const BASE: &str = "/app/";
    const INDEX_URL: &str = "/app/data/index.json";

    fn index_json(ids: &[(&str, &str)]) -> String {
        let articles: Vec<String> = ids
            .iter()
            .map(|(id, date)| {
                format!(
                    r#"{{"id":"{id}","journal":"Nature","date":"{date}","path":"{id}.json","title_zh":"","title_en":"{id}"}}"#
                )
            })
            .collect();
        format!(r#"{{"lastUpdated":"2024-03-06T00:00:00Z","articles":[{}]}}"#, articles.join(","))
    }

    fn detail_json(id: &str) -> String {
        format!(
            r#"{{
                "id": "{id}", "journal": "Nature", "volume": "1", "issue": "2", "date": "2024-03-05",
                "coverImage": {{ "url": "images/{id}.jpg", "credit": "" }},
                "coverStory": {{
                    "title": {{ "zh": "", "en": "{id}" }},
                    "summary": {{ "zh": "", "en": "" }},
                    "keyArticle": {{ "title": "", "authors": [], "doi": "", "pages": "" }},
                    "images": [],
                    "links": {{ "official": "", "doi": "" }}
                }}
            }}"#
        )
    }

    /// Serves canned bodies per URL and yields once per request so that
    /// concurrent callers overlap.
    #[derive(Default)]
    struct FakeFetcher {
        responses: RefCell<HashMap<String, Result<String, FetchError>>>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeFetcher {
        fn serve(&self, url: &str, body: String) {
            self.responses.borrow_mut().insert(url.to_string(), Ok(body));
        }

        fn fail(&self, url: &str, err: FetchError) {
            self.responses.borrow_mut().insert(url.to_string(), Err(err));
        }

        fn calls_to(&self, url: &str) -> usize {
            self.calls.borrow().iter().filter(|called| called.as_str() == url).count()
        }

        fn total_calls(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl DocumentFetcher for FakeFetcher {
        async fn get_text(&self, url: &str) -> Result<String, FetchError> {
            self.calls.borrow_mut().push(url.to_string());
            tokio::task::yield_now().await;
            self.responses
                .borrow()
                .get(url)
                .cloned()
                .unwrap_or(Err(FetchError::Status(404)))
        }
    }

    /// Hand-driven clock; spawned tasks are queued for the test to run.
    #[derive(Default)]
    struct ManualScheduler {
        now: Cell<Duration>,
        tasks: RefCell<Vec<LocalBoxFuture<'static, ()>>>,
    }

    impl ManualScheduler {
        fn advance(&self, by: Duration) {
            self.now.set(self.now.get() + by);
        }

        async fn run_spawned(&self) -> usize {
            let tasks: Vec<_> = self.tasks.borrow_mut().drain(..).collect();
            let count = tasks.len();
            for task in tasks {
                task.await;
            }
            count
        }
    }

    impl Scheduler for ManualScheduler {
        fn now(&self) -> Duration {
            self.now.get()
        }

        fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
            self.tasks.borrow_mut().push(task);
        }
    }

    fn setup() -> (DocumentCache, Rc<FakeFetcher>, Rc<ManualScheduler>) {
        let fetcher = Rc::new(FakeFetcher::default());
        let scheduler = Rc::new(ManualScheduler::default());
        let cache = DocumentCache::new(fetcher.clone(), scheduler.clone(), AssetResolver::new(BASE));
        (cache, fetcher, scheduler)
    }

    #[tokio::test]
    async fn index_is_fetched_once_while_fresh() {
        let (cache, fetcher, scheduler) = setup();
        fetcher.serve(INDEX_URL, index_json(&[("a1", "2024-03-05")]));

        let first = cache.load_index().await.expect("index");
        scheduler.advance(Duration::from_secs(60));
        let second = cache.load_index().await.expect("index");

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(fetcher.calls_to(INDEX_URL), 1);
        assert!(!cache.is_index_stale());
        assert_eq!(scheduler.run_spawned().await, 0);
    }

    #[tokio::test]
    async fn index_failure_is_reported_and_not_cached() {
        let (cache, fetcher, _scheduler) = setup();
        fetcher.fail(INDEX_URL, FetchError::Status(500));

        let err = cache.load_index().await.expect_err("index should fail");
        assert_eq!(err.kind(), LoadErrorKind::IndexUnavailable);
        assert_eq!(err.to_string(), "Failed to load article index");
        // first attempt plus the single retry
        assert_eq!(fetcher.calls_to(INDEX_URL), 2);
        assert!(cache.cached_index().is_none());

        fetcher.serve(INDEX_URL, index_json(&[("a1", "2024-03-05")]));
        let index = cache.load_index().await.expect("index after recovery");
        assert_eq!(index.articles.len(), 1);
        assert_eq!(fetcher.calls_to(INDEX_URL), 3);
    }

    #[tokio::test]
    async fn concurrent_index_requests_share_one_fetch() {
        let (cache, fetcher, _scheduler) = setup();
        fetcher.serve(INDEX_URL, index_json(&[("a1", "2024-03-05")]));

        let (a, b, c) = futures::join!(cache.load_index(), cache.load_index(), cache.load_index());

        let a = a.expect("index");
        assert!(Rc::ptr_eq(&a, &b.expect("index")));
        assert!(Rc::ptr_eq(&a, &c.expect("index")));
        assert_eq!(fetcher.calls_to(INDEX_URL), 1);
    }

    #[tokio::test]
    async fn stale_index_is_served_while_refreshing() {
        let (cache, fetcher, scheduler) = setup();
        fetcher.serve(INDEX_URL, index_json(&[("a1", "2024-03-05")]));
        cache.load_index().await.expect("index");

        scheduler.advance(Duration::from_secs(5 * 60));
        assert!(cache.is_index_stale());
        fetcher.serve(INDEX_URL, index_json(&[("a2", "2024-04-01"), ("a1", "2024-03-05")]));

        let stale = cache.load_index().await.expect("stale index");
        assert_eq!(stale.articles.len(), 1);
        // a second access during the refresh does not start another one
        let still_stale = cache.load_index().await.expect("stale index");
        assert_eq!(still_stale.articles.len(), 1);
        assert_eq!(fetcher.calls_to(INDEX_URL), 1);

        assert_eq!(scheduler.run_spawned().await, 1);
        assert_eq!(fetcher.calls_to(INDEX_URL), 2);
        assert!(!cache.is_index_stale());
        let fresh = cache.load_index().await.expect("fresh index");
        assert_eq!(fresh.hero().map(|e| e.id.as_str()), Some("a2"));
    }

    #[tokio::test]
    async fn failed_refresh_keeps_stale_index() {
        let (cache, fetcher, scheduler) = setup();
        fetcher.serve(INDEX_URL, index_json(&[("a1", "2024-03-05")]));
        cache.load_index().await.expect("index");

        scheduler.advance(Duration::from_secs(10 * 60));
        fetcher.fail(INDEX_URL, FetchError::Transport("offline".into()));
        cache.load_index().await.expect("stale index");
        scheduler.run_spawned().await;

        let kept = cache.cached_index().expect("stale index kept");
        assert_eq!(kept.articles[0].id, "a1");
        assert!(cache.is_index_stale());
    }

    #[tokio::test]
    async fn article_is_cached_for_the_session() {
        let (cache, fetcher, scheduler) = setup();
        fetcher.serve(INDEX_URL, index_json(&[("a1", "2024-03-05")]));
        fetcher.serve("/app/data/a1.json", detail_json("a1"));

        let first = cache.load_article("a1").await.expect("article");
        scheduler.advance(Duration::from_secs(24 * 60 * 60));
        let second = cache.load_article("a1").await.expect("article");

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(fetcher.calls_to("/app/data/a1.json"), 1);
        assert!(cache.cached_article("a1").is_some());
    }

    #[tokio::test]
    async fn unknown_id_fails_without_a_request() {
        let (cache, fetcher, _scheduler) = setup();
        fetcher.serve(INDEX_URL, index_json(&[("a1", "2024-03-05"), ("a2", "2023-11-20")]));
        cache.load_index().await.expect("index");
        let before = fetcher.total_calls();

        let err = cache.load_article("missing-id").await.expect_err("unknown id");

        assert_eq!(err.kind(), LoadErrorKind::NotInIndex);
        assert_eq!(err.to_string(), "Article not found in index");
        assert_eq!(fetcher.total_calls(), before);
    }

    #[tokio::test]
    async fn article_load_fetches_index_when_missing() {
        let (cache, fetcher, _scheduler) = setup();
        fetcher.serve(INDEX_URL, index_json(&[("a1", "2024-03-05")]));
        fetcher.serve("/app/data/a1.json", detail_json("a1"));

        let article = cache.load_article("a1").await.expect("article");

        assert_eq!(article.id, "a1");
        assert_eq!(fetcher.calls_to(INDEX_URL), 1);
        assert!(cache.cached_index().is_some());
    }

    #[tokio::test]
    async fn article_fails_when_index_fails() {
        let (cache, fetcher, _scheduler) = setup();
        fetcher.fail(INDEX_URL, FetchError::Status(404));

        let err = cache.load_article("a1").await.expect_err("no index");
        assert_eq!(err.kind(), LoadErrorKind::IndexUnavailable);
        assert_eq!(fetcher.calls_to("/app/data/a1.json"), 0);
    }

    #[tokio::test]
    async fn concurrent_article_requests_share_one_fetch() {
        let (cache, fetcher, _scheduler) = setup();
        fetcher.serve(INDEX_URL, index_json(&[("x", "2024-03-05")]));
        fetcher.serve("/app/data/x.json", detail_json("x"));

        // index not loaded yet: both callers also share the index request
        let (a, b) = futures::join!(cache.load_article("x"), cache.load_article("x"));

        assert!(Rc::ptr_eq(&a.expect("article"), &b.expect("article")));
        assert_eq!(fetcher.calls_to(INDEX_URL), 1);
        assert_eq!(fetcher.calls_to("/app/data/x.json"), 1);
    }

    #[tokio::test]
    async fn concurrent_article_failures_share_one_error() {
        let (cache, fetcher, _scheduler) = setup();
        fetcher.serve(INDEX_URL, index_json(&[("x", "2024-03-05")]));
        cache.load_index().await.expect("index");
        fetcher.fail("/app/data/x.json", FetchError::Status(503));

        let (a, b) = futures::join!(cache.load_article("x"), cache.load_article("x"));

        assert_eq!(a, b);
        assert_eq!(a.expect_err("article").to_string(), "Failed to load article");
        // one shared operation: first attempt plus one retry
        assert_eq!(fetcher.calls_to("/app/data/x.json"), 2);
        assert!(cache.cached_article("x").is_none());
    }

    #[tokio::test]
    async fn distinct_ids_load_independently() {
        let (cache, fetcher, _scheduler) = setup();
        fetcher.serve(INDEX_URL, index_json(&[("a1", "2024-03-05"), ("a2", "2023-11-20")]));
        fetcher.serve("/app/data/a1.json", detail_json("a1"));

        let (a1, a2) = futures::join!(cache.load_article("a1"), cache.load_article("a2"));

        assert_eq!(a1.expect("a1").id, "a1");
        assert_eq!(a2.expect_err("a2").kind(), LoadErrorKind::ArticleUnavailable);
    }

    #[tokio::test]
    async fn mismatched_document_id_is_rejected() {
        let (cache, fetcher, _scheduler) = setup();
        fetcher.serve(INDEX_URL, index_json(&[("a1", "2024-03-05")]));
        fetcher.serve("/app/data/a1.json", detail_json("other"));

        let err = cache.load_article("a1").await.expect_err("wrong document");
        assert_eq!(err.kind(), LoadErrorKind::ArticleUnavailable);
        // decoded fine, so no retry
        assert_eq!(fetcher.calls_to("/app/data/a1.json"), 1);
    }

    #[tokio::test]
    async fn abandoned_caller_does_not_abort_shared_fetch() {
        let (cache, fetcher, _scheduler) = setup();
        fetcher.serve(INDEX_URL, index_json(&[("a1", "2024-03-05")]));
        fetcher.serve("/app/data/a1.json", detail_json("a1"));
        cache.load_index().await.expect("index");

        let mut abandoned = Box::pin(cache.load_article("a1"));
        assert!(futures::poll!(abandoned.as_mut()).is_pending());
        drop(abandoned);

        let article = cache.load_article("a1").await.expect("article");
        assert_eq!(article.id, "a1");
        assert_eq!(fetcher.calls_to("/app/data/a1.json"), 1);
    }

    #[tokio::test]
    async fn tokio_scheduler_runs_refresh_in_local_set() {
        let fetcher = Rc::new(FakeFetcher::default());
        fetcher.serve(INDEX_URL, index_json(&[("a1", "2024-03-05")]));
        let config = CacheConfig {
            index_stale_after: Duration::ZERO,
            retry_attempts: 0,
        };
        let cache = DocumentCache::with_config(
            fetcher.clone(),
            Rc::new(TokioScheduler::default()),
            AssetResolver::new(BASE),
            config,
        );

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                cache.load_index().await.expect("index");
                fetcher.serve(INDEX_URL, index_json(&[("a2", "2024-04-01")]));
                let stale = cache.load_index().await.expect("stale index");
                assert_eq!(stale.articles[0].id, "a1");

                for _ in 0..100 {
                    if fetcher.calls_to(INDEX_URL) == 2 && cache.cached_index().is_some_and(|i| i.articles[0].id == "a2") {
                        break;
                    }
                    tokio::task::yield_now().await;
                }
                let refreshed = cache.cached_index().expect("index");
                assert_eq!(refreshed.articles[0].id, "a2");
            })
            .await;
    }
}
