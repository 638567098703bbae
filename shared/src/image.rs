//! One-shot fallback for images that fail to load.

/// Where an image element is in its load sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLoadState {
    /// Waiting for the displayed source.
    Loading,
    /// The displayed source rendered.
    Loaded,
    /// The primary source failed; the fallback is being tried.
    FailedPrimary,
    /// The fallback failed as well. Terminal.
    FailedFallback,
}

/// Image source with a single fallback substitution.
///
/// The fallback is attempted at most once, so a broken fallback never causes
/// an error loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLoad {
    primary: Option<String>,
    fallback: String,
    using_fallback: bool,
    state: ImageLoadState,
}

impl ImageLoad {
    /// Start loading `primary`. Without a primary source (or with a blank
    /// one) the fallback is loaded directly.
    pub fn new(primary: Option<String>, fallback: impl Into<String>) -> Self {
        let primary = primary.filter(|src| !src.trim().is_empty());
        Self {
            using_fallback: primary.is_none(),
            primary,
            fallback: fallback.into(),
            state: ImageLoadState::Loading,
        }
    }

    /// Current state.
    pub fn state(&self) -> ImageLoadState {
        self.state
    }

    /// The source the element should display now.
    pub fn src(&self) -> &str {
        match &self.primary {
            Some(primary) if !self.using_fallback => primary,
            _ => &self.fallback,
        }
    }

    /// Whether the fallback is displayed.
    pub fn uses_fallback(&self) -> bool {
        self.using_fallback
    }

    /// The displayed source loaded.
    pub fn on_load(&mut self) {
        if self.state != ImageLoadState::FailedFallback {
            self.state = ImageLoadState::Loaded;
        }
    }

    /// The displayed source failed. Returns `true` when the element must
    /// switch to the fallback source.
    pub fn on_error(&mut self) -> bool {
        if self.state == ImageLoadState::FailedFallback {
            return false;
        }
        let same_source = self.primary.as_deref() == Some(self.fallback.as_str());
        if self.using_fallback || same_source {
            self.using_fallback = true;
            self.state = ImageLoadState::FailedFallback;
            return false;
        }
        self.using_fallback = true;
        self.state = ImageLoadState::FailedPrimary;
        true
    }
}
