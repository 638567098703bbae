//! Where documents are read from: a deployed site over HTTP or a local
//! build directory.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    rc::Rc,
};

use async_trait::async_trait;
use scicover_shared::{
    fetch::{DocumentFetcher, TokioScheduler},
    AssetResolver, DocumentCache, FetchError,
};

/// `GET` over HTTP with `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

#[async_trait(?Send)]
impl DocumentFetcher for HttpFetcher {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}

/// Serves URLs from a directory as a static file server would: the URL path
/// is taken relative to `root`.
#[derive(Debug, Clone)]
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    /// Fetcher rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
        }
    }

    fn file_path(&self, url: &str) -> Result<PathBuf, FetchError> {
        let relative = Path::new(url.trim_start_matches('/'));
        // Mirror a web server: nothing outside the root is reachable.
        if relative
            .components()
            .any(|component| !matches!(component, std::path::Component::Normal(_)))
        {
            return Err(FetchError::Status(404));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait(?Send)]
impl DocumentFetcher for FsFetcher {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let path = self.file_path(url)?;
        tokio::fs::read_to_string(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => FetchError::Status(404),
            ErrorKind::PermissionDenied => FetchError::Status(403),
            ErrorKind::InvalidData => FetchError::Decode(format!("{}: {e}", path.display())),
            _ => FetchError::Transport(format!("{}: {e}", path.display())),
        })
    }
}

/// Parsed `--base` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Deployed site root.
    Http(String),
    /// Local directory laid out like the site root.
    Dir(PathBuf),
}

impl DataSource {
    /// `http://` and `https://` bases are remote; anything else is a
    /// directory.
    pub fn parse(base: &str) -> Self {
        let trimmed = base.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Http(trimmed.to_string())
        } else {
            DataSource::Dir(PathBuf::from(trimmed))
        }
    }

    /// A fresh document cache reading from this source. Must be driven inside
    /// a [`tokio::task::LocalSet`].
    pub fn build_cache(&self) -> DocumentCache {
        let scheduler = Rc::new(TokioScheduler::default());
        match self {
            DataSource::Http(base) => DocumentCache::new(
                Rc::new(HttpFetcher::default()),
                scheduler,
                AssetResolver::new(base),
            ),
            DataSource::Dir(root) => DocumentCache::new(
                Rc::new(FsFetcher::new(root.clone())),
                scheduler,
                AssetResolver::default(),
            ),
        }
    }
}
