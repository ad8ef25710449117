use crate::extract::{BODY_MARKER, TITLE_MARKER};

/// Keywords requested when the caller asks for SEO focus.
pub const SEO_KEYWORDS: &str = "SEO, search engine optimization, content marketing";

const DEFAULT_TONE: &str = "informative";
const DEFAULT_LENGTH: &str = "medium-length";

/// Parameters for one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationRequest {
    pub topic: String,
    pub tone: String,
    pub length: String,
    pub keywords: String,
}

impl GenerationRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }

    /// Append [`SEO_KEYWORDS`] to whatever keywords are already set.
    pub fn with_seo_focus(mut self) -> Self {
        if self.keywords.trim().is_empty() {
            self.keywords = SEO_KEYWORDS.to_string();
        } else {
            self.keywords = format!("{}, {SEO_KEYWORDS}", self.keywords.trim());
        }
        self
    }
}

/// Prompt text for the generator, asking for the marker format that
/// [`extract`](crate::extract) parses.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let length = non_empty_or(&request.length, DEFAULT_LENGTH);
    let tone = non_empty_or(&request.tone, DEFAULT_TONE);
    let topic = request.topic.trim();

    let mut prompt = format!("Write a {length} blog post about \"{topic}\".\n- Tone: {tone}\n");
    let keywords = request.keywords.trim();
    if !keywords.is_empty() {
        prompt.push_str(&format!("- Include these keywords: {keywords}\n"));
    }
    prompt.push_str(
        "- Use headers, bullet points, and a strong conclusion.\n\
         - Make it engaging and suitable for DEV.to publication.\n\n\
         Respond in exactly this format:\n",
    );
    prompt.push_str(&format!("{TITLE_MARKER} <a concise title on a single line>\n"));
    prompt.push_str(&format!("{BODY_MARKER} <the complete post in Markdown>\n"));
    prompt
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::{build_prompt, GenerationRequest, SEO_KEYWORDS};

    #[test]
    fn prompt_embeds_request_and_markers() {
        let request = GenerationRequest {
            topic: "Rust for web services".into(),
            tone: "casual".into(),
            length: "short".into(),
            keywords: "axum, tokio".into(),
        };
        let prompt = build_prompt(&request);
        assert!(prompt.starts_with("Write a short blog post about \"Rust for web services\"."));
        assert!(prompt.contains("- Tone: casual\n"));
        assert!(prompt.contains("- Include these keywords: axum, tokio\n"));
        assert!(prompt.contains("\nblog-title: "));
        assert!(prompt.contains("\nblog-body: "));
    }

    #[test]
    fn blank_fields_fall_back_and_keywords_line_is_omitted() {
        let prompt = build_prompt(&GenerationRequest::new("Testing"));
        assert!(prompt.contains("medium-length"));
        assert!(prompt.contains("- Tone: informative\n"));
        assert!(!prompt.contains("Include these keywords"));
    }

    #[test]
    fn seo_focus_appends_keywords() {
        let request = GenerationRequest {
            keywords: "rust".into(),
            ..GenerationRequest::new("x")
        }
        .with_seo_focus();
        assert_eq!(request.keywords, format!("rust, {SEO_KEYWORDS}"));
        assert_eq!(
            GenerationRequest::new("x").with_seo_focus().keywords,
            SEO_KEYWORDS
        );
    }
}
