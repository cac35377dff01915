//! Rendering subsystem.
//!
//! # Data Flow
//! ```text
//! Resolution from routing
//!     → pages.rs (askama template for the resolved TemplateId)
//!     → context.rs (read-only injected data shared by every render)
//!     → RenderedPage (template id + HTML)
//!     → sink.rs (caller-owned content region; wholesale replacement)
//! ```
//!
//! # Design Decisions
//! - The render context is captured once at startup and never mutated
//! - Templates are compiled in (inline askama sources); no file I/O at render
//! - Every render replaces the content region wholesale
//! - Math typesetting is a sink concern, requested after dynamic renders

pub mod context;
pub mod pages;
pub mod sink;

pub use context::RenderContext;
pub use pages::{ContentBody, ContentPage, RelatedLink, RenderedPage, Renderer};
pub use sink::{BufferSink, ContentSink};
