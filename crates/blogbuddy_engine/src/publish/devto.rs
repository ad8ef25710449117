use blogbuddy_core::{Article, Destination};
use buddy_logging::buddy_info;
use serde::Serialize;

use super::{map_reqwest_error, require, status_error, top_level_url, Publisher};
use crate::http::read_payload;
use crate::{DestinationConfig, PublishResult};

/// DEV.to articles API: JSON article object, `api-key` header.
#[derive(Debug, Clone)]
pub struct DevToPublisher {
    config: DestinationConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct CreateArticle<'a> {
    article: ArticleFields<'a>,
}

#[derive(Serialize)]
struct ArticleFields<'a> {
    title: &'a str,
    published: bool,
    body_markdown: &'a str,
    tags: Vec<&'a str>,
}

impl DevToPublisher {
    pub fn new(config: DestinationConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }
}

#[async_trait::async_trait]
impl Publisher for DevToPublisher {
    fn name(&self) -> &str {
        Destination::DevTo.name()
    }

    async fn publish(&self, article: &Article) -> PublishResult {
        let api_key = require(self.config.api_key.as_deref(), Destination::DevTo, "api_key")?;

        // Normalized articles always carry the base tags.
        let tags: Vec<&str> = article.tags().iter().map(String::as_str).collect();
        let payload = CreateArticle {
            article: ArticleFields {
                title: article.title(),
                published: true,
                body_markdown: article.body(),
                tags,
            },
        };
        buddy_info!(
            "Publishing to devto title_len={} body_len={}",
            article.title().len(),
            article.body().len()
        );

        let response = self
            .client
            .post(self.config.endpoint.as_str())
            .header("api-key", api_key)
            .json(&payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let upstream = read_payload(response).await.map_err(map_reqwest_error)?;
        if !upstream.status.is_success() {
            return Err(status_error(upstream));
        }
        top_level_url(upstream)
    }
}
