//! Read-only data injected into every render.

/// Injected render data, populated once at application start.
///
/// Templates read from this on every render; nothing writes to it after
/// construction, so it can be shared freely.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Prefix the application is mounted under, without a trailing slash.
    /// Empty when mounted at the server root.
    pub context_path: String,
    /// Site name shown in page chrome.
    pub site_name: String,
}

impl RenderContext {
    pub fn new(context_path: impl Into<String>) -> Self {
        Self {
            context_path: context_path.into(),
            site_name: "Rutherford Physics".to_string(),
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new("")
    }
}
