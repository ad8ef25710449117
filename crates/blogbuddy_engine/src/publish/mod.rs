use std::sync::Arc;

use blogbuddy_core::{Article, Destination};

use crate::http::{payload_text, UpstreamResponse};
use crate::{DestinationConfig, FailureKind, PublishError, PublishResult};

mod blogger;
mod devto;
mod hashnode;

pub use blogger::BloggerPublisher;
pub use devto::DevToPublisher;
pub use hashnode::HashnodePublisher;

/// One destination's translation of an [`Article`] onto its API.
///
/// Implementations receive the article by shared reference and never retry.
#[async_trait::async_trait]
pub trait Publisher: Send + Sync {
    /// Key under which this publisher's result is reported.
    fn name(&self) -> &str;

    async fn publish(&self, article: &Article) -> PublishResult;
}

/// Build the publisher for `destination` from its configuration.
pub fn publisher_for(
    destination: Destination,
    config: DestinationConfig,
    client: reqwest::Client,
) -> Arc<dyn Publisher> {
    match destination {
        Destination::DevTo => Arc::new(DevToPublisher::new(config, client)),
        Destination::Hashnode => Arc::new(HashnodePublisher::new(config, client)),
        Destination::Blogger => Arc::new(BloggerPublisher::new(config, client)),
    }
}

/// Credential or identifier required by `destination`, or a configuration failure.
fn require<'a>(
    value: Option<&'a str>,
    destination: Destination,
    field: &'static str,
) -> Result<&'a str, PublishError> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| PublishError::missing_config(destination, field))
}

fn map_reqwest_error(err: reqwest::Error) -> PublishError {
    if err.is_timeout() {
        return PublishError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return PublishError::new(FailureKind::InvalidEndpoint, err.to_string());
    }
    PublishError::new(FailureKind::Network, err.to_string())
}

/// Non-2xx answer, carried back with its body untouched.
fn status_error(upstream: UpstreamResponse) -> PublishError {
    PublishError::with_payload(
        FailureKind::HttpStatus(upstream.status.as_u16()),
        payload_text(&upstream.payload),
        upstream.payload,
    )
}

/// Top-level `url` string of a successful answer.
fn top_level_url(upstream: UpstreamResponse) -> PublishResult {
    match upstream.payload.get("url").and_then(|url| url.as_str()) {
        Some(url) => Ok(crate::Published {
            url: Some(url.to_string()),
        }),
        None => Err(PublishError::with_payload(
            FailureKind::InvalidResponse,
            "response did not include a url",
            upstream.payload,
        )),
    }
}
