use blogbuddy_core::{Article, Destination};
use buddy_logging::{buddy_info, buddy_warn};
use serde::Serialize;
use serde_json::Value;

use super::{map_reqwest_error, require, status_error, Publisher};
use crate::http::{payload_text, read_payload};
use crate::{DestinationConfig, FailureKind, PublishError, PublishResult, Published};

const PUBLISH_POST_MUTATION: &str = "mutation PublishPost($input: PublishPostInput!) { publishPost(input: $input) { post { url } } }";

/// Hashnode GraphQL API: a single `publishPost` mutation.
///
/// A 2xx answer without `data.publishPost.post.url` still counts as
/// published, with no URL.
#[derive(Debug, Clone)]
pub struct HashnodePublisher {
    config: DestinationConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'static str,
    variables: Variables<'a>,
}

#[derive(Serialize)]
struct Variables<'a> {
    input: PublishPostInput<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PublishPostInput<'a> {
    title: &'a str,
    content_markdown: &'a str,
    publication_id: &'a str,
    tags: Vec<TagInput<'a>>,
}

#[derive(Serialize)]
struct TagInput<'a> {
    name: &'a str,
}

impl HashnodePublisher {
    pub fn new(config: DestinationConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }
}

#[async_trait::async_trait]
impl Publisher for HashnodePublisher {
    fn name(&self) -> &str {
        Destination::Hashnode.name()
    }

    async fn publish(&self, article: &Article) -> PublishResult {
        let token = require(self.config.api_key.as_deref(), Destination::Hashnode, "api_key")?;
        let publication_id = require(
            self.config.publication_id.as_deref(),
            Destination::Hashnode,
            "publication_id",
        )?;

        let request = GraphQlRequest {
            query: PUBLISH_POST_MUTATION,
            variables: Variables {
                input: PublishPostInput {
                    title: article.title(),
                    content_markdown: article.body(),
                    publication_id,
                    tags: article
                        .tags()
                        .iter()
                        .map(|name| TagInput { name: name.as_str() })
                        .collect(),
                },
            },
        };
        buddy_info!(
            "Publishing to hashnode title_len={} body_len={}",
            article.title().len(),
            article.body().len()
        );

        let response = self
            .client
            .post(self.config.endpoint.as_str())
            .header(reqwest::header::AUTHORIZATION, token)
            .json(&request)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let upstream = read_payload(response).await.map_err(map_reqwest_error)?;
        if !upstream.status.is_success() {
            return Err(status_error(upstream));
        }

        if let Some(errors) = upstream
            .payload
            .get("errors")
            .and_then(Value::as_array)
            .filter(|errors| !errors.is_empty())
        {
            let message = errors
                .iter()
                .map(|error| {
                    error
                        .get("message")
                        .and_then(Value::as_str)
                        .map(ToOwned::to_owned)
                        .unwrap_or_else(|| payload_text(error))
                })
                .collect::<Vec<_>>()
                .join("; ");
            return Err(PublishError::with_payload(
                FailureKind::Rejected,
                message,
                upstream.payload,
            ));
        }

        let url = upstream
            .payload
            .pointer("/data/publishPost/post/url")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned);
        if url.is_none() {
            buddy_warn!("Hashnode accepted the post but returned no url");
        }
        Ok(Published { url })
    }
}
