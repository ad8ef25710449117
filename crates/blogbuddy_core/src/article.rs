use serde::Serialize;

/// Canonical, normalized unit of publishable content.
///
/// Built once by [`normalize`](crate::normalize) or
/// [`normalize_parts`](crate::normalize_parts) and read-only afterwards:
/// the fields are only reachable through accessors so publishers cannot
/// rewrite what they were handed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    title: String,
    body: String,
    topic: String,
    tags: Vec<String>,
}

impl Article {
    pub(crate) fn new(title: String, body: String, topic: String, tags: Vec<String>) -> Self {
        Self {
            title,
            body,
            topic,
            tags,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Markdown body, never starting with a heading that repeats the title.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}
