/// Tags every article carries, always first and in this order.
pub const BASE_TAGS: [&str; 2] = ["ai", "blogging"];
/// Upper bound on tags per article; most destinations reject more.
pub const MAX_TAGS: usize = 4;
/// Topic words shorter than this are too generic to be useful tags.
const MIN_WORD_CHARS: usize = 4;

/// Derive a small, stable tag set from a free-text topic.
///
/// The topic is lower-cased and stripped of punctuation, then split on
/// whitespace. Words of at least four characters are appended after the
/// base tags in first-occurrence order, skipping duplicates, until
/// [`MAX_TAGS`] is reached.
pub fn derive_tags(topic: &str) -> Vec<String> {
    let mut tags: Vec<String> = BASE_TAGS.iter().map(|tag| tag.to_string()).collect();

    let stripped: String = topic
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    for word in stripped.split_whitespace() {
        if tags.len() >= MAX_TAGS {
            break;
        }
        if word.chars().count() < MIN_WORD_CHARS || tags.iter().any(|tag| tag == word) {
            continue;
        }
        tags.push(word.to_string());
    }

    tags
}
