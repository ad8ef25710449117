/// Drop a leading `# ...` line (the title is shown separately) and trim.
///
/// Blank lines before the heading don't shield it. At most one line is
/// removed per call, so a second heading that follows the first survives.
pub fn clean_body(text: &str) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if let Some(index) = lines.iter().position(|line| !line.trim().is_empty()) {
        if lines[index].trim().starts_with("# ") {
            lines.remove(index);
        }
    }
    lines.join("\n").trim().to_string()
}
