use buddy_logging::{buddy_debug, buddy_warn};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::{payload_text, read_payload};
use crate::{GenerationError, GenerationFailureKind, GeneratorConfig};

/// Generative-AI collaborator: prompt in, raw completion text out.
#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Gemini `generateContent` REST client.
#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    config: GeneratorConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiGenerator {
    pub fn new(config: GeneratorConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    fn request_url(&self) -> Result<Url, GenerationError> {
        let base = self.config.endpoint.trim_end_matches('/');
        let raw = format!("{base}/v1beta/models/{}:generateContent", self.config.model);
        Url::parse(&raw)
            .map_err(|err| GenerationError::new(GenerationFailureKind::InvalidEndpoint, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Generator for GeminiGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                GenerationError::new(GenerationFailureKind::MissingApiKey, "generator api key is not configured")
            })?;
        let url = self.request_url()?;
        buddy_debug!(
            "Requesting completion model={} prompt_len={}",
            self.config.model,
            prompt.len()
        );

        let body = GenerateContentRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        };
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let upstream = read_payload(response).await.map_err(map_reqwest_error)?;

        if !upstream.status.is_success() {
            let message = upstream
                .payload
                .pointer("/error/message")
                .and_then(|value| value.as_str())
                .map(ToOwned::to_owned)
                .unwrap_or_else(|| payload_text(&upstream.payload));
            buddy_warn!("Generator returned status {}", upstream.status);
            return Err(GenerationError::new(
                GenerationFailureKind::HttpStatus(upstream.status.as_u16()),
                message,
            ));
        }

        let parsed: GenerateContentResponse = serde_json::from_value(upstream.payload)
            .map_err(|err| GenerationError::new(GenerationFailureKind::InvalidResponse, err.to_string()))?;
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GenerationError::new(
                GenerationFailureKind::EmptyResponse,
                "generator returned no text",
            ));
        }
        buddy_debug!("Completion received text_len={}", text.len());
        Ok(text)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> GenerationError {
    if err.is_timeout() {
        return GenerationError::new(GenerationFailureKind::Timeout, err.to_string());
    }
    GenerationError::new(GenerationFailureKind::Network, err.to_string())
}
