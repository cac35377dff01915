//! The content region every render replaces.

use crate::render::pages::RenderedPage;

/// Caller-owned target for rendered pages.
///
/// In the browser this is the `#content` element plus the math typesetter;
/// in tests and the preview CLI it is a buffer.
pub trait ContentSink {
    /// Replace the content region wholesale.
    fn replace_content(&mut self, page: &RenderedPage);

    /// Run a math-typesetting pass over the page. Requested after every
    /// dynamic render, since fetched content may carry LaTeX.
    fn typeset_math(&mut self);
}

/// In-memory sink for tests and the preview CLI.
#[derive(Debug, Default)]
pub struct BufferSink {
    pub current: Option<RenderedPage>,
    pub replacements: usize,
    pub typeset_passes: usize,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html(&self) -> Option<&str> {
        self.current.as_ref().map(|page| page.html.as_str())
    }
}

impl ContentSink for BufferSink {
    fn replace_content(&mut self, page: &RenderedPage) {
        self.current = Some(page.clone());
        self.replacements += 1;
    }

    fn typeset_math(&mut self) {
        self.typeset_passes += 1;
    }
}
