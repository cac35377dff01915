//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Requested path ("/about-us", "/topics/energy", ...)
//!     → table.rs (exact lookup in the static table)
//!     → table.rs (ordered scan of the dynamic prefix list)
//!     → Return: Resolution::Static | Resolution::Dynamic | Resolution::NoMatch
//! ```
//!
//! # Design Decisions
//! - Tables are fixed at construction, immutable afterwards
//! - Exact match always beats prefix match
//! - Dynamic prefixes are evaluated in order; first match wins
//! - Explicit NoMatch rather than silent default

pub mod table;

pub use table::{Resolution, RouteTable, TemplateId};
