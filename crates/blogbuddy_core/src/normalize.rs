use crate::body::clean_body;
use crate::extract::{extract, first_heading, Extracted};
use crate::tags::derive_tags;
use crate::Article;

/// Title used when neither a marker nor a heading supplies one.
pub const PLACEHOLDER_TITLE: &str = "Untitled Blog";

/// Build an [`Article`] from raw generator output.
pub fn normalize(raw: &str, topic: &str) -> Article {
    let Extracted { title, body } = extract(raw);
    normalize_parts(title.as_deref(), &body, topic)
}

/// Build an [`Article`] from an already separated title and body.
///
/// Title resolution order: explicit title, first `# ` heading in the
/// content, [`PLACEHOLDER_TITLE`].
pub fn normalize_parts(title: Option<&str>, content: &str, topic: &str) -> Article {
    let title = title
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(ToOwned::to_owned)
        .or_else(|| first_heading(content))
        .unwrap_or_else(|| PLACEHOLDER_TITLE.to_string());

    Article::new(title, clean_body(content), topic.to_string(), derive_tags(topic))
}
