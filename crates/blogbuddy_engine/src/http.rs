use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;

/// Transport settings shared by the generator and every publisher.
///
/// Timeouts are unset by default, leaving the transport's own behaviour.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            request_timeout: None,
            user_agent: concat!("blogbuddy/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpSettings {
    pub fn build_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.clone());
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}

/// Status and body of an upstream answer.
pub(crate) struct UpstreamResponse {
    pub status: StatusCode,
    pub payload: Value,
}

/// Read the whole body, keeping it as JSON when it parses and as a plain
/// string otherwise.
pub(crate) async fn read_payload(
    response: reqwest::Response,
) -> Result<UpstreamResponse, reqwest::Error> {
    let status = response.status();
    let text = response.text().await?;
    let payload = serde_json::from_str(&text).unwrap_or(Value::String(text));
    Ok(UpstreamResponse { status, payload })
}

/// Human-readable form of an upstream payload without reinterpreting it.
pub(crate) fn payload_text(payload: &Value) -> String {
    match payload {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
