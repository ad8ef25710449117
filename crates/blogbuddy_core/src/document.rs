use crate::Article;

const FRONTMATTER_FENCE: &str = "---\n";

/// Title and body recovered from a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub title: Option<String>,
    pub body: String,
}

/// Render an article as a standalone markdown document:
/// frontmatter (title, tags), the title as `# ` heading, then the body.
pub fn render_document(article: &Article) -> String {
    format!(
        "---\ntitle: {title}\ntags: {tags}\n---\n\n# {title}\n\n{body}\n",
        title = article.title(),
        tags = article.tags().join(", "),
        body = article.body(),
    )
}

/// Split a markdown document into its frontmatter title (if any) and body.
///
/// Documents without frontmatter, or with an unterminated block, come back
/// whole as the body.
pub fn parse_document(text: &str) -> ParsedDocument {
    let normalized = text.replace("\r\n", "\n");
    let Some(rest) = normalized.strip_prefix(FRONTMATTER_FENCE) else {
        return ParsedDocument {
            title: None,
            body: normalized,
        };
    };
    let Some(end) = rest.find("\n---") else {
        return ParsedDocument {
            title: None,
            body: normalized,
        };
    };

    let title = rest[..end]
        .lines()
        .find_map(|line| line.strip_prefix("title:"))
        .map(|value| value.trim().trim_matches(['"', '\'']).trim().to_string())
        .filter(|value| !value.is_empty());
    let body = rest[end + "\n---".len()..].trim_start_matches('\n').to_string();

    ParsedDocument { title, body }
}

#[cfg(test)]
mod tests {
    use super::{parse_document, render_document};
    use crate::normalize_parts;

    #[test]
    fn rendered_document_parses_back_to_same_article() {
        let article = normalize_parts(Some("Hello"), "Body **text**.", "Rust tooling");
        let parsed = parse_document(&render_document(&article));
        assert_eq!(parsed.title.as_deref(), Some("Hello"));

        let again = normalize_parts(parsed.title.as_deref(), &parsed.body, "Rust tooling");
        assert_eq!(again, article);
    }

    #[test]
    fn plain_markdown_has_no_title() {
        let parsed = parse_document("# Heading\nbody");
        assert_eq!(parsed.title, None);
        assert_eq!(parsed.body, "# Heading\nbody");
    }

    #[test]
    fn unterminated_frontmatter_is_body() {
        let text = "---\ntitle: x\nbody";
        assert_eq!(parse_document(text).body, text);
    }

    #[test]
    fn quoted_titles_are_unwrapped() {
        let parsed = parse_document("---\ntitle: \"Quoted\"\n---\ntext");
        assert_eq!(parsed.title.as_deref(), Some("Quoted"));
        assert_eq!(parsed.body, "text");
    }
}
