use std::collections::BTreeMap;

use blogbuddy_core::{render_document, AppViewModel, PublishOutcome};
use serde::Serialize;

/// Generated article in the `{title, blog, topic}` shape, plus its tags.
#[derive(Debug, Serialize)]
struct GeneratedJson<'a> {
    title: &'a str,
    blog: &'a str,
    topic: &'a str,
    tags: &'a [String],
}

#[derive(Debug, PartialEq, Serialize)]
struct PublishJson {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ReportJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    article: Option<GeneratedJson<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    publishes: BTreeMap<&'static str, PublishJson>,
}

/// Plain-text report: the article as a markdown document followed by one
/// line per destination.
pub(crate) fn render_text(view: &AppViewModel, include_article: bool) -> String {
    let mut out = String::new();
    if include_article {
        if let Some(article) = &view.article {
            out.push_str(&render_document(article));
        }
    }
    if let Some(error) = &view.last_error {
        out.push_str(&format!("generation failed: {error}\n"));
    }
    for row in &view.publishes {
        let line = match &row.outcome {
            Some(PublishOutcome::Published { url: Some(url) }) => format!("published {url}"),
            Some(PublishOutcome::Published { url: None }) => {
                "published (no url returned)".to_string()
            }
            Some(PublishOutcome::Failed { reason }) => format!("failed: {reason}"),
            None => "pending".to_string(),
        };
        out.push_str(&format!("{}: {line}\n", row.destination.display_name()));
    }
    out
}

pub(crate) fn render_json(view: &AppViewModel, include_article: bool) -> serde_json::Result<String> {
    let report = ReportJson {
        article: view
            .article
            .as_ref()
            .filter(|_| include_article)
            .map(|article| GeneratedJson {
                title: article.title(),
                blog: article.body(),
                topic: article.topic(),
                tags: article.tags(),
            }),
        error: view.last_error.as_deref(),
        publishes: view
            .publishes
            .iter()
            .map(|row| {
                let entry = match &row.outcome {
                    Some(PublishOutcome::Published { url }) => PublishJson {
                        success: true,
                        url: url.clone(),
                        error: None,
                    },
                    Some(PublishOutcome::Failed { reason }) => PublishJson {
                        success: false,
                        url: None,
                        error: Some(reason.clone()),
                    },
                    None => PublishJson {
                        success: false,
                        url: None,
                        error: Some("still in flight".to_string()),
                    },
                };
                (row.destination.name(), entry)
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}

/// True when generation failed or any destination did not publish.
pub(crate) fn has_failures(view: &AppViewModel) -> bool {
    view.last_error.is_some()
        || view
            .publishes
            .iter()
            .any(|row| !matches!(row.outcome, Some(PublishOutcome::Published { .. })))
}

#[cfg(test)]
mod tests {
    use super::{has_failures, render_json, render_text};
    use blogbuddy_core::{
        normalize, update, AppState, AppViewModel, Destination, GenerationRequest, Msg,
        PublishOutcome, PublishRowView, SessionState,
    };
    use serde_json::json;

    fn view() -> AppViewModel {
        AppViewModel {
            session: SessionState::Ready,
            article: Some(normalize(
                "blog-title: Hello World\nblog-body: # Hello World\nSome **bold** text.",
                "AI in Healthcare",
            )),
            publishes: vec![
                PublishRowView {
                    destination: Destination::DevTo,
                    in_flight: false,
                    outcome: Some(PublishOutcome::Published {
                        url: Some("https://dev.to/me/hello".into()),
                    }),
                },
                PublishRowView {
                    destination: Destination::Blogger,
                    in_flight: false,
                    outcome: Some(PublishOutcome::Failed {
                        reason: "missing configuration publication_id: Blogger is not configured with publication_id".into(),
                    }),
                },
            ],
            last_error: None,
            dirty: false,
        }
    }

    #[test]
    fn text_report_lists_each_destination() {
        let text = render_text(&view(), false);
        assert_eq!(
            text,
            "DEV.to: published https://dev.to/me/hello\n\
             Blogger: failed: missing configuration publication_id: Blogger is not configured with publication_id\n"
        );
    }

    #[test]
    fn json_report_uses_success_url_error_shape() {
        let rendered = render_json(&view(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["article"]["title"], "Hello World");
        assert_eq!(value["article"]["blog"], "Some **bold** text.");
        assert_eq!(value["article"]["tags"], json!(["ai", "blogging", "healthcare"]));
        assert_eq!(
            value["publishes"]["devto"],
            json!({ "success": true, "url": "https://dev.to/me/hello" })
        );
        assert_eq!(value["publishes"]["blogger"]["success"], false);
    }

    #[test]
    fn any_failed_destination_is_a_failure() {
        assert!(has_failures(&view()));
        let mut ok = view();
        ok.publishes.truncate(1);
        assert!(!has_failures(&ok));
    }

    #[test]
    fn blank_topic_generation_is_a_failure() {
        let (state, effects) = update(
            AppState::new(),
            Msg::GenerateRequested(GenerationRequest::new(" ")),
        );
        assert!(effects.is_empty());

        let view = state.view();
        assert!(has_failures(&view));
        assert_eq!(
            render_text(&view, true),
            "generation failed: topic must not be blank\n"
        );
    }
}
