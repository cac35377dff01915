//! Error types for navigation.

use crate::routing::TemplateId;
use thiserror::Error;

/// Errors surfaced by a navigation attempt.
#[derive(Debug, Error)]
pub enum NavError {
    /// Neither the static table nor a dynamic prefix matched the path.
    #[error("no template matched path {path:?}")]
    RouteNotFound { path: String },

    /// The server fetch for a dynamic page failed. The error page has
    /// already been rendered into the sink when this is returned.
    #[error("fetch failed for {url}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// A template failed to render.
    #[error("template {template} failed to render")]
    Render {
        template: TemplateId,
        #[source]
        source: askama::Error,
    },
}

/// Errors from the outbound HTTP layer.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error")]
    Transport(#[from] reqwest::Error),

    #[error("server returned status {status}")]
    Status { status: u16 },

    #[error("response body is not a valid content page")]
    Decode(#[from] serde_json::Error),
}
