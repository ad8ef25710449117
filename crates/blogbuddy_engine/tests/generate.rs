use blogbuddy_engine::{
    GeminiGenerator, GenerationFailureKind, Generator, GeneratorConfig, HttpSettings,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPLETION_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

fn generator(server: &MockServer, api_key: Option<&str>) -> GeminiGenerator {
    let config = GeneratorConfig {
        endpoint: server.uri(),
        api_key: api_key.map(ToOwned::to_owned),
        ..GeneratorConfig::default()
    };
    GeminiGenerator::new(config, HttpSettings::default().build_client().unwrap())
}

#[tokio::test]
async fn completion_text_is_joined_from_parts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETION_PATH))
        .and(header("x-goog-api-key", "gem-key"))
        .and(body_partial_json(json!({
            "contents": [{ "parts": [{ "text": "Write something" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "blog-title: Hi\n" },
                    { "text": "blog-body: There" }
                ]}
            }]
        })))
        .mount(&server)
        .await;

    let text = generator(&server, Some("gem-key"))
        .complete("Write something")
        .await
        .expect("completion");
    assert_eq!(text, "blog-title: Hi\nblog-body: There");
}

#[tokio::test]
async fn upstream_error_message_is_surfaced_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETION_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "code": 429, "message": "Resource has been exhausted (e.g. check quota)." }
        })))
        .mount(&server)
        .await;

    let err = generator(&server, Some("gem-key"))
        .complete("prompt")
        .await
        .unwrap_err();
    assert_eq!(err.kind, GenerationFailureKind::HttpStatus(429));
    assert_eq!(err.message, "Resource has been exhausted (e.g. check quota).");
}

#[tokio::test]
async fn missing_api_key_fails_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = generator(&server, None).complete("prompt").await.unwrap_err();
    assert_eq!(err.kind, GenerationFailureKind::MissingApiKey);
}

#[tokio::test]
async fn empty_candidates_are_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let err = generator(&server, Some("gem-key"))
        .complete("prompt")
        .await
        .unwrap_err();
    assert_eq!(err.kind, GenerationFailureKind::EmptyResponse);
}
