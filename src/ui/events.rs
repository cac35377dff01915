//! Delegated event dispatch.
//!
//! # Responsibilities
//! - Translate page events into directives the caller applies to the DOM
//! - Invoke navigation for anchors carrying a content URI
//!
//! # Design Decisions
//! - Directives are emitted even when the navigation itself fails; the
//!   click was still intercepted and the dropdown still closes
//! - A failed navigation is reported alongside the directives rather than
//!   swallowed; the error page has already been rendered by the navigator

use crate::error::NavError;
use crate::fetch::PageFetcher;
use crate::navigator::{NavigateOptions, NavigationOutcome, Navigator};
use crate::render::ContentSink;
use crate::ui::answers::{check_answers, AnswerInput};
use crate::ui::highlight::related_link_ids;
use crate::ui::video::{video_request, VideoRequest};

/// A delegated page event, with the data attributes read off the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Click on an anchor-like element.
    AnchorClick { content_uri: Option<String> },
    /// Pointer entered an anchor-like element.
    AnchorHover {
        physics_links: Option<String>,
        maths_links: Option<String>,
        question_links: Option<String>,
    },
    /// The check-answer control was activated.
    CheckAnswers { inputs: Vec<AnswerInput> },
    /// Click on a button-like element.
    ButtonClick { play_video: Option<String> },
}

/// A DOM effect for the caller to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiDirective {
    /// Prevent the browser's default handling of the event.
    SuppressDefault,
    /// Close any open dropdown/hover chrome.
    CloseDropdowns,
    /// Remove the related-link class from every anchor.
    ClearHighlights,
    /// Apply the related-link class to the hovered element and these ids.
    Highlight { ids: Vec<String> },
    /// Answer check passed.
    RevealExplanation,
    HideWrongIndicator,
    HideCheckButton,
    /// Answer check failed.
    HideExplanation,
    RevealWrongIndicator,
    /// Remove any video already in the modal, insert this one.
    ReplaceModalVideo(VideoRequest),
    OpenVideoModal,
}

/// What dispatching one event produced.
#[derive(Debug)]
pub struct EventOutcome {
    pub directives: Vec<UiDirective>,
    /// Present only for clicks that triggered a navigation.
    pub navigation: Option<Result<NavigationOutcome, NavError>>,
}

impl EventOutcome {
    fn directives(directives: Vec<UiDirective>) -> Self {
        Self {
            directives,
            navigation: None,
        }
    }
}

/// Dispatch one delegated event.
pub async fn handle_event<F: PageFetcher>(
    nav: &mut Navigator<F>,
    sink: &mut impl ContentSink,
    event: UiEvent,
) -> EventOutcome {
    match event {
        UiEvent::AnchorClick { content_uri } => match content_uri {
            // No content URI: yield to default link behavior.
            None => EventOutcome::directives(Vec::new()),
            Some(uri) => {
                let navigation = nav.navigate(sink, &uri, NavigateOptions::push()).await;
                EventOutcome {
                    directives: vec![UiDirective::CloseDropdowns, UiDirective::SuppressDefault],
                    navigation: Some(navigation),
                }
            }
        },
        UiEvent::AnchorHover {
            physics_links,
            maths_links,
            question_links,
        } => {
            let ids = related_link_ids(
                physics_links.as_deref(),
                maths_links.as_deref(),
                question_links.as_deref(),
            );
            let mut directives = vec![UiDirective::ClearHighlights];
            if !ids.is_empty() {
                directives.push(UiDirective::Highlight { ids });
            }
            EventOutcome::directives(directives)
        }
        UiEvent::CheckAnswers { inputs } => {
            let verdict = check_answers(&inputs);
            tracing::debug!(correct = verdict.is_correct(), "answer check");
            let directives = if verdict.is_correct() {
                vec![
                    UiDirective::HideWrongIndicator,
                    UiDirective::RevealExplanation,
                    UiDirective::HideCheckButton,
                ]
            } else {
                vec![
                    UiDirective::HideExplanation,
                    UiDirective::RevealWrongIndicator,
                ]
            };
            EventOutcome::directives(directives)
        }
        UiEvent::ButtonClick { play_video } => match play_video {
            None => EventOutcome::directives(Vec::new()),
            Some(name) => {
                let request = video_request(
                    &nav.render_context().context_path,
                    &nav.video_config().base_path,
                    &name,
                );
                EventOutcome::directives(vec![
                    UiDirective::ReplaceModalVideo(request),
                    UiDirective::OpenVideoModal,
                ])
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavConfig;
    use crate::error::FetchError;
    use crate::render::{BufferSink, ContentPage, RenderContext};
    use crate::routing::TemplateId;

    struct NoFetcher;

    impl PageFetcher for NoFetcher {
        async fn fetch_page(&self, _url: &str) -> Result<ContentPage, FetchError> {
            Err(FetchError::Status { status: 503 })
        }
    }

    fn navigator() -> Navigator<NoFetcher> {
        Navigator::new(&NavConfig::default(), RenderContext::default(), NoFetcher)
    }

    #[tokio::test]
    async fn test_click_with_content_uri_navigates_and_suppresses_default() {
        let mut nav = navigator();
        let mut sink = BufferSink::new();

        let outcome = handle_event(
            &mut nav,
            &mut sink,
            UiEvent::AnchorClick {
                content_uri: Some("/about-us".into()),
            },
        )
        .await;

        assert_eq!(
            outcome.directives,
            vec![UiDirective::CloseDropdowns, UiDirective::SuppressDefault]
        );
        match outcome.navigation {
            Some(Ok(NavigationOutcome::Static { template })) => {
                assert_eq!(template, TemplateId::AboutUs)
            }
            other => panic!("unexpected navigation outcome: {other:?}"),
        }
        assert_eq!(nav.history().len(), 2);
    }

    #[tokio::test]
    async fn test_click_without_content_uri_yields_to_default() {
        let mut nav = navigator();
        let mut sink = BufferSink::new();

        let outcome = handle_event(
            &mut nav,
            &mut sink,
            UiEvent::AnchorClick { content_uri: None },
        )
        .await;

        assert!(outcome.directives.is_empty());
        assert!(outcome.navigation.is_none());
        assert_eq!(sink.replacements, 0);
    }

    #[tokio::test]
    async fn test_click_on_broken_route_still_closes_dropdowns() {
        let mut nav = navigator();
        let mut sink = BufferSink::new();

        let outcome = handle_event(
            &mut nav,
            &mut sink,
            UiEvent::AnchorClick {
                content_uri: Some("/unknown/thing".into()),
            },
        )
        .await;

        assert_eq!(
            outcome.directives,
            vec![UiDirective::CloseDropdowns, UiDirective::SuppressDefault]
        );
        assert!(matches!(
            outcome.navigation,
            Some(Err(NavError::RouteNotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn test_hover_clears_then_highlights() {
        let mut nav = navigator();
        let mut sink = BufferSink::new();

        let outcome = handle_event(
            &mut nav,
            &mut sink,
            UiEvent::AnchorHover {
                physics_links: Some("p1,p2".into()),
                maths_links: None,
                question_links: Some("q1".into()),
            },
        )
        .await;

        assert_eq!(
            outcome.directives,
            vec![
                UiDirective::ClearHighlights,
                UiDirective::Highlight {
                    ids: vec!["p1".into(), "p2".into(), "q1".into()]
                }
            ]
        );
    }

    #[tokio::test]
    async fn test_hover_with_no_links_only_clears() {
        let mut nav = navigator();
        let mut sink = BufferSink::new();

        let outcome = handle_event(
            &mut nav,
            &mut sink,
            UiEvent::AnchorHover {
                physics_links: None,
                maths_links: None,
                question_links: None,
            },
        )
        .await;

        assert_eq!(outcome.directives, vec![UiDirective::ClearHighlights]);
    }

    #[tokio::test]
    async fn test_correct_answers_reveal_explanation() {
        let mut nav = navigator();
        let mut sink = BufferSink::new();

        let outcome = handle_event(
            &mut nav,
            &mut sink,
            UiEvent::CheckAnswers {
                inputs: vec![AnswerInput::Text {
                    expected: "588".into(),
                    value: "588".into(),
                }],
            },
        )
        .await;

        assert_eq!(
            outcome.directives,
            vec![
                UiDirective::HideWrongIndicator,
                UiDirective::RevealExplanation,
                UiDirective::HideCheckButton,
            ]
        );
    }

    #[tokio::test]
    async fn test_wrong_answers_reveal_indicator() {
        let mut nav = navigator();
        let mut sink = BufferSink::new();

        let outcome = handle_event(
            &mut nav,
            &mut sink,
            UiEvent::CheckAnswers {
                inputs: vec![AnswerInput::Choice {
                    expected: "1".into(),
                    checked: false,
                }],
            },
        )
        .await;

        assert_eq!(
            outcome.directives,
            vec![
                UiDirective::HideExplanation,
                UiDirective::RevealWrongIndicator,
            ]
        );
    }

    #[tokio::test]
    async fn test_play_video_button_opens_modal() {
        let mut nav = navigator();
        let mut sink = BufferSink::new();

        let outcome = handle_event(
            &mut nav,
            &mut sink,
            UiEvent::ButtonClick {
                play_video: Some("crate_lift.mp4".into()),
            },
        )
        .await;

        assert_eq!(
            outcome.directives,
            vec![
                UiDirective::ReplaceModalVideo(VideoRequest {
                    src: "/static/video/crate_lift.mp4".into()
                }),
                UiDirective::OpenVideoModal,
            ]
        );
    }

    #[tokio::test]
    async fn test_plain_button_does_nothing() {
        let mut nav = navigator();
        let mut sink = BufferSink::new();

        let outcome =
            handle_event(&mut nav, &mut sink, UiEvent::ButtonClick { play_video: None }).await;
        assert!(outcome.directives.is_empty());
    }
}
