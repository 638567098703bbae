//! Platform seams of the document cache: how a `GET` is performed and how a
//! background task is started.

use std::time::Duration;

use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use crate::FetchError;

/// Performs plain `GET` requests for static documents.
///
/// Implementations return the body of a 2xx response and map everything else
/// to [`FetchError`]. They must not retry on their own; the cache applies the
/// retry policy.
#[async_trait(?Send)]
pub trait DocumentFetcher {
    /// Fetch `url` and return the response body.
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Clock and single-threaded executor used by the cache.
pub trait Scheduler {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;

    /// Run `task` to completion on the current thread without blocking the
    /// caller.
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>);
}

/// Fetch and decode one JSON document, retrying transport and status failures
/// up to `retry_attempts` extra times.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    fetcher: &dyn DocumentFetcher,
    url: &str,
    retry_attempts: u32,
) -> Result<T, FetchError> {
    let mut attempt = 0;
    loop {
        match fetcher.get_text(url).await {
            Ok(body) => {
                return serde_json::from_str(&body).map_err(|err| FetchError::Decode(err.to_string()));
            },
            Err(err) if err.is_retryable() && attempt < retry_attempts => {
                attempt += 1;
                tracing::debug!(url, attempt, error = %err, "retrying document fetch");
            },
            Err(err) => return Err(err),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::TokioScheduler;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::{Duration, Instant};

    use futures::future::LocalBoxFuture;

    use super::Scheduler;

    /// [`Scheduler`] for native builds. Background tasks go through
    /// [`tokio::task::spawn_local`], so the cache must be driven from inside a
    /// [`tokio::task::LocalSet`].
    #[derive(Debug, Clone)]
    pub struct TokioScheduler {
        origin: Instant,
    }

    impl Default for TokioScheduler {
        fn default() -> Self {
            Self {
                origin: Instant::now(),
            }
        }
    }

    impl Scheduler for TokioScheduler {
        fn now(&self) -> Duration {
            self.origin.elapsed()
        }

        fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
            drop(tokio::task::spawn_local(task));
        }
    }
}
