/// Marker preceding the single-line title in generator output.
pub const TITLE_MARKER: &str = "blog-title:";
/// Marker preceding the body, which runs to the end of the generator output.
pub const BODY_MARKER: &str = "blog-body:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub title: Option<String>,
    pub body: String,
}

/// Split raw generator output into title and body using the marker format:
/// - `blog-title:` (any case) yields the trimmed rest of that line
/// - `blog-body:` (any case) yields the trimmed rest of the whole input
/// - without a body marker the entire input is the body
///
/// Never fails; marker-free text degrades to "all body, no title".
pub fn extract(raw: &str) -> Extracted {
    // ASCII lowering keeps byte offsets aligned with `raw`.
    let lowered = raw.to_ascii_lowercase();

    let title = lowered
        .find(TITLE_MARKER)
        .map(|start| {
            let rest = &raw[start + TITLE_MARKER.len()..];
            rest.split('\n').next().unwrap_or(rest).trim().to_string()
        })
        .filter(|title| !title.is_empty());

    let body = match lowered.find(BODY_MARKER) {
        Some(start) => raw[start + BODY_MARKER.len()..].trim().to_string(),
        None => raw.to_string(),
    };

    Extracted { title, body }
}

/// First level-1 heading (`# ...`) in `text`, without its marker.
pub fn first_heading(text: &str) -> Option<String> {
    text.lines()
        .find_map(|line| line.trim().strip_prefix("# "))
        .map(|heading| heading.trim().to_string())
        .filter(|heading| !heading.is_empty())
}
