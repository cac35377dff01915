//! Navigation controller.
//!
//! # Responsibilities
//! - Resolve a requested path against the route tables
//! - Render static routes locally; fetch and render dynamic routes
//! - Keep the history model in step with every navigation
//! - React to back/forward (popped) history states
//!
//! # Design Decisions
//! - The content region and fetcher sit behind traits; navigation logic
//!   never touches the DOM or the network directly
//! - History is pushed whether or not the navigation itself succeeded,
//!   matching what the browser observes
//! - A failed dynamic fetch renders an explicit error page and returns a
//!   typed error; the previous view is never silently kept

use tracing::{error, info};

use crate::config::{ApiConfig, NavConfig, VideoConfig};
use crate::error::NavError;
use crate::fetch::PageFetcher;
use crate::history::{pop_action, HistoryStack, HistoryState, PopAction};
use crate::render::{ContentSink, RenderContext, Renderer};
use crate::routing::{Resolution, RouteTable, TemplateId};

/// Per-navigation options.
#[derive(Debug, Clone, Copy)]
pub struct NavigateOptions {
    /// Push a new history entry keyed by the requested path.
    pub add_to_history: bool,
}

impl NavigateOptions {
    /// Ordinary link navigation: push a history entry.
    pub fn push() -> Self {
        Self {
            add_to_history: true,
        }
    }

    /// Re-navigation from a popped history state: no new entry.
    pub fn no_history() -> Self {
        Self {
            add_to_history: false,
        }
    }
}

/// What a successful navigation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Rendered from the local template set; no network involved.
    Static { template: TemplateId },
    /// Fetched from the content API and rendered with a dynamic template.
    Dynamic { template: TemplateId, page_id: String },
}

impl NavigationOutcome {
    pub fn template(&self) -> TemplateId {
        match self {
            NavigationOutcome::Static { template } => *template,
            NavigationOutcome::Dynamic { template, .. } => *template,
        }
    }
}

/// Result of reacting to a popped history state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopOutcome {
    /// The event carried no state; nothing was done.
    Ignored,
    /// The home sentinel was popped; the caller must perform a full reload.
    ReloadRequired,
    /// An ordinary path was popped and re-navigated.
    Navigated(NavigationOutcome),
}

/// The navigation controller.
pub struct Navigator<F> {
    table: RouteTable,
    renderer: Renderer,
    fetcher: F,
    api: ApiConfig,
    video: VideoConfig,
    history: HistoryStack,
}

impl<F: PageFetcher> Navigator<F> {
    pub fn new(config: &NavConfig, ctx: RenderContext, fetcher: F) -> Self {
        Self {
            table: RouteTable::new(),
            renderer: Renderer::new(ctx),
            fetcher,
            api: config.api.clone(),
            video: config.video.clone(),
            history: HistoryStack::new(),
        }
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn route_table(&self) -> &RouteTable {
        &self.table
    }

    pub fn render_context(&self) -> &RenderContext {
        self.renderer.context()
    }

    pub fn video_config(&self) -> &VideoConfig {
        &self.video
    }

    /// Navigate to `path`, rendering into `sink`.
    ///
    /// History bookkeeping happens regardless of the dispatch outcome.
    pub async fn navigate(
        &mut self,
        sink: &mut impl ContentSink,
        path: &str,
        options: NavigateOptions,
    ) -> Result<NavigationOutcome, NavError> {
        info!(path, add_to_history = options.add_to_history, "navigating");
        let result = self.dispatch(sink, path).await;

        if options.add_to_history {
            self.history.push(path);
        }

        match &result {
            Ok(outcome) => info!(path, template = %outcome.template(), "navigation complete"),
            Err(err) => error!(path, error = %err, "navigation failed"),
        }
        result
    }

    async fn dispatch(
        &self,
        sink: &mut impl ContentSink,
        path: &str,
    ) -> Result<NavigationOutcome, NavError> {
        match self.table.resolve(path) {
            Resolution::Static(template) => {
                let page = self.renderer.render_static(template)?;
                sink.replace_content(&page);
                Ok(NavigationOutcome::Static { template })
            }
            Resolution::Dynamic { template, api_path } => {
                let url = self.api.page_url(&api_path);
                match self.fetcher.fetch_page(&url).await {
                    Ok(content) => {
                        let page = self.renderer.render_content(template, &content)?;
                        sink.replace_content(&page);
                        // Fetched content may carry LaTeX.
                        sink.typeset_math();
                        Ok(NavigationOutcome::Dynamic {
                            template,
                            page_id: content.id,
                        })
                    }
                    Err(source) => {
                        error!(%url, error = %source, "content fetch failed");
                        let page = self.renderer.render_error(path, &source.to_string());
                        sink.replace_content(&page);
                        Err(NavError::Fetch { url, source })
                    }
                }
            }
            Resolution::NoMatch => {
                error!(path, "template not found for path");
                Err(NavError::RouteNotFound {
                    path: path.to_string(),
                })
            }
        }
    }

    /// React to a popped history state, as the browser's popstate handler
    /// would.
    pub async fn handle_pop(
        &mut self,
        sink: &mut impl ContentSink,
        state: Option<HistoryState>,
    ) -> Result<PopOutcome, NavError> {
        match pop_action(state.as_ref()) {
            PopAction::Ignore => Ok(PopOutcome::Ignored),
            PopAction::Reload => Ok(PopOutcome::ReloadRequired),
            PopAction::Navigate(path) => {
                let outcome = self
                    .navigate(sink, &path, NavigateOptions::no_history())
                    .await?;
                Ok(PopOutcome::Navigated(outcome))
            }
        }
    }

    /// Step back in the modeled history and handle the resulting pop.
    pub async fn go_back(&mut self, sink: &mut impl ContentSink) -> Result<PopOutcome, NavError> {
        let state = self.history.back().cloned();
        self.handle_pop(sink, state).await
    }
}
