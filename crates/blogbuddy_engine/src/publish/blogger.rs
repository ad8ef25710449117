use blogbuddy_core::{Article, Destination};
use buddy_logging::buddy_info;
use serde::Serialize;
use url::Url;

use super::{map_reqwest_error, require, status_error, top_level_url, Publisher};
use crate::http::read_payload;
use crate::{DestinationConfig, FailureKind, PublishError, PublishResult};

/// Blogger v3 posts API. Blogger has no tag concept here, so only title
/// and content are sent.
#[derive(Debug, Clone)]
pub struct BloggerPublisher {
    config: DestinationConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct NewPost<'a> {
    kind: &'static str,
    title: &'a str,
    content: &'a str,
}

impl BloggerPublisher {
    pub fn new(config: DestinationConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    /// `{endpoint}/blogs/{blog_id}/posts`
    fn posts_url(&self, blog_id: &str) -> Result<Url, PublishError> {
        let mut url = Url::parse(&self.config.endpoint)
            .map_err(|err| PublishError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| {
                PublishError::new(FailureKind::InvalidEndpoint, "endpoint cannot carry a path")
            })?
            .pop_if_empty()
            .extend(["blogs", blog_id, "posts"]);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl Publisher for BloggerPublisher {
    fn name(&self) -> &str {
        Destination::Blogger.name()
    }

    async fn publish(&self, article: &Article) -> PublishResult {
        let token = require(self.config.api_key.as_deref(), Destination::Blogger, "api_key")?;
        let blog_id = require(
            self.config.publication_id.as_deref(),
            Destination::Blogger,
            "publication_id",
        )?;
        let url = self.posts_url(blog_id)?;

        let post = NewPost {
            kind: "blogger#post",
            title: article.title(),
            content: article.body(),
        };
        buddy_info!(
            "Publishing to blogger title_len={} body_len={}",
            article.title().len(),
            article.body().len()
        );

        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&post)
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

#[cfg(test)]
mod tests {
    use super::BloggerPublisher;
    use crate::{DestinationConfig, FailureKind, HttpSettings};
    use blogbuddy_core::Destination;

    fn publisher(endpoint: &str) -> BloggerPublisher {
        let config = DestinationConfig::for_destination(Destination::Blogger).with_endpoint(endpoint);
        BloggerPublisher::new(config, HttpSettings::default().build_client().unwrap())
    }

    #[test]
    fn posts_url_appends_blog_path() {
        let url = publisher("https://www.googleapis.com/blogger/v3/")
            .posts_url("123")
            .unwrap();
        assert_eq!(url.as_str(), "https://www.googleapis.com/blogger/v3/blogs/123/posts");
    }

    #[test]
    fn malformed_endpoint_is_reported() {
        let err = publisher("not a url").posts_url("123").unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidEndpoint);
    }
}
