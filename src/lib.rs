//! Client-side navigation controller for the physics learning site.
//!
//! Given a requested path, either render a known static view from the local
//! template set, fetch the page's JSON from the content API and render it
//! with the matching dynamic template, or fail loudly when no route matches.
//! Also manages the browser-history model and the page's delegated UI
//! handlers (answer checking, hover highlighting, video modal).
//!
//! # Architecture Overview
//!
//! ```text
//!   UiEvent (click / hover / answer / video)
//!       │
//!       ▼
//!   ┌────────┐ content-uri  ┌───────────┐  exact/prefix   ┌─────────┐
//!   │   ui   │─────────────▶│ navigator │────────────────▶│ routing │
//!   │dispatch│              │           │◀────────────────│ tables  │
//!   └───┬────┘              └─────┬─────┘   Resolution    └─────────┘
//!       │                         │
//!       │ UiDirectives            ├── Static ──▶ render (askama) ──┐
//!       ▼                         │                                │
//!   caller applies                ├── Dynamic ─▶ fetch (reqwest)   │
//!   to the DOM                    │              └▶ render ──▶ typeset
//!       ▲                         │                                │
//!       │                         ▼                                ▼
//!       │                   ┌─────────┐                      ┌──────────┐
//!       └───────────────────│ history │                      │ContentSink│
//!                           │  stack  │                      │ #content  │
//!                           └─────────┘                      └──────────┘
//! ```
//!
//! The content region, the network, and the history stack all sit behind
//! explicit types so the whole flow is testable without a browser.

// Core subsystems
pub mod navigator;
pub mod routing;

// Page production
pub mod fetch;
pub mod render;

// Browser state
pub mod history;

// UI wiring
pub mod ui;

// Cross-cutting concerns
pub mod config;
pub mod error;

pub use config::NavConfig;
pub use error::{FetchError, NavError};
pub use history::{HistoryStack, HistoryState, PopAction};
pub use navigator::{NavigateOptions, NavigationOutcome, Navigator, PopOutcome};
pub use render::{BufferSink, ContentPage, ContentSink, RenderContext};
pub use routing::{Resolution, RouteTable, TemplateId};
