use blogbuddy_core::{
    clean_body, derive_tags, extract, normalize, normalize_parts, BASE_TAGS, MAX_TAGS,
    PLACEHOLDER_TITLE,
};
use pretty_assertions::assert_eq;

#[test]
fn marker_output_becomes_clean_article() {
    let raw = "blog-title: Hello World\nblog-body: # Hello World\nSome **bold** text.";
    let article = normalize(raw, "AI in Healthcare");

    assert_eq!(article.title(), "Hello World");
    assert_eq!(article.body(), "Some **bold** text.");
    assert_eq!(article.tags(), ["ai", "blogging", "healthcare"]);
    assert_eq!(article.topic(), "AI in Healthcare");
}

#[test]
fn marker_free_output_falls_back_to_heading() {
    let raw = "# My Post\nBody text here.";

    let extracted = extract(raw);
    assert_eq!(extracted.title, None);
    assert_eq!(extracted.body, raw);

    let article = normalize(raw, "");
    assert_eq!(article.title(), "My Post");
    assert_eq!(article.body(), "Body text here.");
    assert_eq!(article.tags(), BASE_TAGS);
}

#[test]
fn body_spans_to_end_of_input() {
    let raw = "Preamble the model added.\nblog-title:  Multi line  \nblog-body:\n\nIntro\n\n## Part\n- one\n- two\n\n";
    let extracted = extract(raw);

    assert_eq!(extracted.title.as_deref(), Some("Multi line"));
    assert_eq!(extracted.body, "Intro\n\n## Part\n- one\n- two");
}

#[test]
fn no_title_anywhere_uses_placeholder() {
    let article = normalize("blog-body: just prose, no heading", "topic");
    assert_eq!(article.title(), PLACEHOLDER_TITLE);
    assert_eq!(article.body(), "just prose, no heading");
}

#[test]
fn explicit_parts_prefer_given_title() {
    let article = normalize_parts(Some("  Given  "), "# Other\n\ntext", "Distributed tracing");
    assert_eq!(article.title(), "Given");
    assert_eq!(article.body(), "text");
    assert_eq!(
        article.tags(),
        ["ai", "blogging", "distributed", "tracing"]
    );
}

#[test]
fn blank_explicit_title_falls_through() {
    let article = normalize_parts(Some("   "), "# From Heading\ntext", "");
    assert_eq!(article.title(), "From Heading");
}

#[test]
fn heading_after_blank_line_is_title_and_leaves_body() {
    let article = normalize("\n# My Post\nBody text here.", "");
    assert_eq!(article.title(), "My Post");
    assert_eq!(article.body(), "Body text here.");
}

#[test]
fn normalized_article_never_starts_with_title_heading() {
    let inputs = [
        "blog-title: A\nblog-body: # A\nbody",
        "# B\nbody",
        "  # C  \n\nbody",
        "blog-body:\n# D\n\n\nbody",
        "\n# E\nbody",
    ];
    for raw in inputs {
        let article = normalize(raw, "anything");
        assert!(
            !article.body().starts_with("# "),
            "body still starts with heading for {raw:?}: {:?}",
            article.body()
        );
    }
}

#[test]
fn tags_are_bounded_and_start_with_base() {
    let topics = [
        "AI in Healthcare",
        "The future of quantum computing research",
        "Rust, Go & Zig: compared!",
        "a b c",
    ];
    for topic in topics {
        let tags = derive_tags(topic);
        assert!(tags.len() <= MAX_TAGS);
        assert_eq!(&tags[..2], BASE_TAGS);
        assert_eq!(tags, derive_tags(topic));
    }
}

#[test]
fn clean_body_is_idempotent_on_generated_shapes() {
    let bodies = ["# Title\n\ntext", "text only", "\n\nplain\n", ""];
    for body in bodies {
        let once = clean_body(body);
        assert_eq!(clean_body(&once), once);
    }
}
