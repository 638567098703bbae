//! Build-time configuration of the front-end.

/// Deployment base path, read at compile time.
/// - For local development: "/"
/// - For GitHub Pages: "/scicover/" (set `SCICOVER_BASE_PATH` in the workflow)
#[cfg(not(feature = "pages"))]
pub const BASE_PATH: &str = match option_env!("SCICOVER_BASE_PATH") {
    Some(path) => path,
    None => "/",
};

#[cfg(feature = "pages")]
pub const BASE_PATH: &str = match option_env!("SCICOVER_BASE_PATH") {
    Some(path) => path,
    None => "/scicover/",
};

/// How long the article index counts as fresh before a background refresh.
pub const INDEX_STALE_AFTER_SECS: u64 = 5 * 60;

/// Router basename: the base path without its trailing slash, `None` at the
/// site root.
pub fn router_basename() -> Option<String> {
    let trimmed = BASE_PATH.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
