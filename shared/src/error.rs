//! Error types of the loading layer.

use thiserror::Error;

/// Why a document could not be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// The index request failed.
    IndexUnavailable,
    /// The requested id is not listed in the index.
    NotInIndex,
    /// The detail request failed or returned the wrong document.
    ArticleUnavailable,
}

impl LoadErrorKind {
    /// Human readable reason shown to users.
    pub fn message(self) -> &'static str {
        match self {
            LoadErrorKind::IndexUnavailable => "Failed to load article index",
            LoadErrorKind::NotInIndex => "Article not found in index",
            LoadErrorKind::ArticleUnavailable => "Failed to load article",
        }
    }
}

/// The only error surfaced by [`crate::DocumentCache`]. Cloneable so every
/// waiter on a shared request receives the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", .kind.message())]
pub struct LoadError {
    kind: LoadErrorKind,
}

impl LoadError {
    /// Error of the given kind.
    pub fn new(kind: LoadErrorKind) -> Self {
        Self {
            kind,
        }
    }

    /// What went wrong.
    pub fn kind(&self) -> LoadErrorKind {
        self.kind
    }

    /// The user facing message.
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

impl From<LoadErrorKind> for LoadError {
    fn from(kind: LoadErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Failure of a single `GET`, reported by a [`crate::fetch::DocumentFetcher`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("HTTP error: {0}")]
    Status(u16),
    /// The body was not the expected JSON document.
    #[error("parse error: {0}")]
    Decode(String),
}

impl FetchError {
    /// Whether another attempt could succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, FetchError::Decode(_))
    }
}
