//! UI event wiring.
//!
//! # Data Flow
//! ```text
//! UiEvent (click / hover / answer check / button press)
//!     → events.rs (dispatch)
//!     → answers.rs | highlight.rs | video.rs (pure per-event logic)
//!     → navigator (only for content-uri clicks)
//!     → Vec<UiDirective> the caller applies to the page
//! ```
//!
//! # Design Decisions
//! - Every handler is pure apart from the navigation call; directives
//!   describe the DOM effects instead of performing them
//! - Elements without the relevant data attribute yield no directives, so
//!   default browser behavior proceeds
//! - Answer checking is synchronous and idempotent; nothing is submitted

pub mod answers;
pub mod events;
pub mod highlight;
pub mod video;

pub use answers::{check_answers, AnswerInput, AnswerVerdict};
pub use events::{handle_event, EventOutcome, UiDirective, UiEvent};
pub use highlight::related_link_ids;
pub use video::{video_request, VideoRequest};
