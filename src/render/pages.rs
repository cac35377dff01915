//! Page templates and payload types.
//!
//! # Responsibilities
//! - Decode the server's content-page JSON
//! - Render the static page set and the three dynamic page kinds
//! - Emit the data attributes the UI handlers contract on
//!   (`data-content-uri`, `data-expected-answer`, `data-play-video`)
//!
//! # Design Decisions
//! - Templates are inline askama sources, compiled into the binary
//! - HTML escaping is on by default; payload text is never trusted
//! - The error page is best-effort: if it cannot render, a plain-text
//!   fallback is produced instead of failing the failure path

use askama::Template;
use serde::{Deserialize, Serialize};

use crate::error::NavError;
use crate::render::context::RenderContext;
use crate::routing::TemplateId;

/// A content page as returned by `GET {context}/api{path}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPage {
    pub id: String,
    pub content: ContentBody,
    /// Related content links, keyed off the server's meta-content map.
    #[serde(default)]
    pub related: Vec<RelatedLink>,
}

/// One block of page content. Children nest arbitrarily.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentBody {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Markdown/LaTeX body text; typeset by the caller after render.
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub children: Vec<ContentBody>,
    /// Expected value for a free-text answer field.
    #[serde(default)]
    pub expected_answer: Option<String>,
    /// Tick-box choices; `value` is "1" (must be ticked) or "0" (must not).
    #[serde(default)]
    pub choices: Vec<AnswerChoice>,
    /// Video file name under the static video base.
    #[serde(default)]
    pub video: Option<String>,
    /// Explanation shown once the answer check passes.
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerChoice {
    pub label: String,
    pub value: String,
}

/// Link to another content page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedLink {
    pub id: String,
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Site-relative path, e.g. "/questions/q_energy_1".
    pub url: String,
}

/// Output of a render: which template produced it and the HTML itself.
///
/// `template` is `None` only for the failure page, which does not belong to
/// the route tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub template: Option<TemplateId>,
    pub html: String,
}

struct StaticCopy {
    title: &'static str,
    lede: &'static str,
    body: &'static str,
}

fn static_copy(template: TemplateId) -> StaticCopy {
    match template {
        TemplateId::Register => StaticCopy {
            title: "Register",
            lede: "Create an account to track the questions you have answered.",
            body: "Registration takes a minute and keeps your progress across devices.",
        },
        TemplateId::Learn => StaticCopy {
            title: "Learn",
            lede: "Work through the physics topics at your own pace.",
            body: "Each topic links its concepts and a bank of questions of increasing difficulty.",
        },
        TemplateId::Discussion => StaticCopy {
            title: "Discussion",
            lede: "Talk through problems with other students and teachers.",
            body: "Be precise: state what you tried, where you got stuck, and what you expected.",
        },
        TemplateId::AboutUs => StaticCopy {
            title: "About us",
            lede: "Who builds this site and why.",
            body: "We are a small team of physicists and teachers developing open problem sets.",
        },
        TemplateId::RealWorld => StaticCopy {
            title: "Real world",
            lede: "Physics outside the classroom.",
            body: "From bridge resonance to GPS clock corrections: the same equations, real stakes.",
        },
        TemplateId::Applying => StaticCopy {
            title: "Applying",
            lede: "Advice for university applications.",
            body: "What admissions tutors look for, and how problem-solving practice helps.",
        },
        TemplateId::Challenge => StaticCopy {
            title: "Challenge",
            lede: "Harder problems for when the main track feels easy.",
            body: "No hints here. Expect multi-step estimation and unfamiliar setups.",
        },
        TemplateId::WhyPhysics => StaticCopy {
            title: "Why physics?",
            lede: "The case for studying physics further.",
            body: "Physics teaches you to reason from first principles about anything measurable.",
        },
        TemplateId::Topic | TemplateId::Question | TemplateId::Concept => {
            unreachable!("dynamic template has no static copy")
        }
    }
}

#[derive(Template)]
#[template(
    source = r#"<article class="static-page">
  <header>
    <p class="site-name">{{ ctx.site_name }}</p>
    <h1>{{ title }}</h1>
    <p class="lede">{{ lede }}</p>
  </header>
  <p>{{ body }}</p>
  <nav class="page-links">
    <a data-content-uri="/learn" href="{{ ctx.context_path }}/learn">Start learning</a>
  </nav>
</article>"#,
    ext = "html"
)]
struct StaticPageTemplate<'a> {
    ctx: &'a RenderContext,
    title: &'a str,
    lede: &'a str,
    body: &'a str,
}

#[derive(Template)]
#[template(
    source = r#"<article class="topic" id="topic-{{ page.id }}">
  <h1>{{ page.content.title }}</h1>
  {% if page.content.value.is_some() %}
  <div class="topic-summary">{{ page.content.value.as_ref().unwrap() }}</div>
  {% endif %}
  {% for section in page.content.children %}
  <section>
    <h2>{{ section.title }}</h2>
    {% if section.value.is_some() %}<p>{{ section.value.as_ref().unwrap() }}</p>{% endif %}
  </section>
  {% endfor %}
  {% if page.related.len() > 0 %}
  <nav class="related">
    <h2>Questions and concepts</h2>
    <ul>
      {% for link in page.related %}
      <li><a id="{{ link.id }}" data-content-uri="{{ link.url }}" href="{{ ctx.context_path }}{{ link.url }}">{{ link.title }}</a></li>
      {% endfor %}
    </ul>
  </nav>
  {% endif %}
</article>"#,
    ext = "html"
)]
struct TopicTemplate<'a> {
    ctx: &'a RenderContext,
    page: &'a ContentPage,
}

#[derive(Template)]
#[template(
    source = r#"<article class="question" id="question-{{ page.id }}">
  <h1>{{ page.content.title }}</h1>
  {% if page.content.value.is_some() %}
  <div class="question-body">{{ page.content.value.as_ref().unwrap() }}</div>
  {% endif %}
  {% for part in page.content.children %}
  <section class="question-part">
    {% if part.value.is_some() %}<p>{{ part.value.as_ref().unwrap() }}</p>{% endif %}
    {% for choice in part.choices %}
    <label><input type="checkbox" value="{{ choice.value }}"> {{ choice.label }}</label>
    {% endfor %}
    {% if part.expected_answer.is_some() %}
    <input type="text" data-expected-answer="{{ part.expected_answer.as_ref().unwrap() }}">
    {% endif %}
    {% if part.video.is_some() %}
    <button data-play-video="{{ part.video.as_ref().unwrap() }}">Watch the video</button>
    {% endif %}
  </section>
  {% endfor %}
  <button id="checkAnswer">Check my answer</button>
  <div class="question-wrong" hidden>Not quite. Try again.</div>
  <div class="question-explanation" hidden>
    {% if page.content.explanation.is_some() %}{{ page.content.explanation.as_ref().unwrap() }}{% endif %}
  </div>
</article>"#,
    ext = "html"
)]
struct QuestionTemplate<'a> {
    page: &'a ContentPage,
}

#[derive(Template)]
#[template(
    source = r#"<article class="concept" id="concept-{{ page.id }}">
  <h1>{{ page.content.title }}</h1>
  {% if page.content.value.is_some() %}
  <div class="concept-body">{{ page.content.value.as_ref().unwrap() }}</div>
  {% endif %}
  {% for section in page.content.children %}
  <section>
    <h2>{{ section.title }}</h2>
    {% if section.value.is_some() %}<p>{{ section.value.as_ref().unwrap() }}</p>{% endif %}
  </section>
  {% endfor %}
  {% if page.related.len() > 0 %}
  <nav class="related">
    <ul>
      {% for link in page.related %}
      <li><a id="{{ link.id }}" data-content-uri="{{ link.url }}" href="{{ ctx.context_path }}{{ link.url }}">{{ link.title }}</a></li>
      {% endfor %}
    </ul>
  </nav>
  {% endif %}
</article>"#,
    ext = "html"
)]
struct ConceptTemplate<'a> {
    ctx: &'a RenderContext,
    page: &'a ContentPage,
}

#[derive(Template)]
#[template(
    source = r#"<article class="page-error">
  <h1>Something went wrong</h1>
  <p>We could not load <code>{{ path }}</code>.</p>
  <p class="error-detail">{{ message }}</p>
  <p><a data-content-uri="/learn" href="{{ ctx.context_path }}/learn">Back to the topic list</a></p>
</article>"#,
    ext = "html"
)]
struct ErrorTemplate<'a> {
    ctx: &'a RenderContext,
    path: &'a str,
    message: &'a str,
}

/// Renders pages against a fixed [`RenderContext`].
#[derive(Debug, Clone)]
pub struct Renderer {
    ctx: RenderContext,
}

impl Renderer {
    pub fn new(ctx: RenderContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    /// Render one of the eight locally available templates.
    pub fn render_static(&self, template: TemplateId) -> Result<RenderedPage, NavError> {
        debug_assert!(template.is_static());
        let copy = static_copy(template);
        let html = StaticPageTemplate {
            ctx: &self.ctx,
            title: copy.title,
            lede: copy.lede,
            body: copy.body,
        }
        .render()
        .map_err(|source| NavError::Render { template, source })?;
        Ok(RenderedPage {
            template: Some(template),
            html,
        })
    }

    /// Render a fetched content page with the resolved dynamic template.
    pub fn render_content(
        &self,
        template: TemplateId,
        page: &ContentPage,
    ) -> Result<RenderedPage, NavError> {
        let rendered = match template {
            TemplateId::Topic => TopicTemplate { ctx: &self.ctx, page }.render(),
            TemplateId::Question => QuestionTemplate { page }.render(),
            TemplateId::Concept => ConceptTemplate { ctx: &self.ctx, page }.render(),
            other => {
                debug_assert!(other.is_static(), "unhandled dynamic template");
                return self.render_static(other);
            }
        };
        rendered
            .map(|html| RenderedPage {
                template: Some(template),
                html,
            })
            .map_err(|source| NavError::Render { template, source })
    }

    /// Render the explicit failure page shown when a dynamic fetch fails.
    pub fn render_error(&self, path: &str, message: &str) -> RenderedPage {
        let html = ErrorTemplate {
            ctx: &self.ctx,
            path,
            message,
        }
        .render()
        .unwrap_or_else(|_| format!("Could not load {path}: {message}"));
        RenderedPage {
            template: None,
            html,
        }
    }
}
