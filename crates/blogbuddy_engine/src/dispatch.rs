use std::collections::BTreeMap;
use std::sync::Arc;

use blogbuddy_core::Article;
use buddy_logging::{buddy_info, buddy_warn};
use futures_util::future::join_all;

use crate::{PublishResult, Publisher};

/// Publish `article` through a single publisher.
pub async fn dispatch_one(article: &Article, publisher: &dyn Publisher) -> PublishResult {
    let result = publisher.publish(article).await;
    match &result {
        Ok(published) => buddy_info!(
            "Published to {} url={}",
            publisher.name(),
            published.url.as_deref().unwrap_or("<none>")
        ),
        Err(err) => buddy_warn!("Publishing to {} failed: {}", publisher.name(), err),
    }
    result
}

/// Publish `article` through every publisher concurrently.
///
/// Each attempt is independent: a failure is recorded under that publisher's
/// name and never affects the others. Publishers sharing a name overwrite
/// each other's entry.
pub async fn dispatch_all(
    article: &Article,
    publishers: &[Arc<dyn Publisher>],
) -> BTreeMap<String, PublishResult> {
    let attempts = publishers.iter().map(|publisher| async move {
        let result = dispatch_one(article, publisher.as_ref()).await;
        (publisher.name().to_string(), result)
    });
    join_all(attempts).await.into_iter().collect()
}
