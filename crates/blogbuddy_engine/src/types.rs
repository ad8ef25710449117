use std::fmt;

use blogbuddy_core::{Destination, RequestId};
use serde_json::Value;

/// A destination accepted the article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    /// Public URL of the new post, when the destination reported one.
    pub url: Option<String>,
}

pub type PublishResult = Result<Published, PublishError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct PublishError {
    pub kind: FailureKind,
    pub message: String,
    /// Upstream response body, untouched (JSON when it parsed, else a string).
    pub payload: Option<Value>,
}

impl PublishError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            payload: None,
        }
    }

    pub fn with_payload(kind: FailureKind, message: impl Into<String>, payload: Value) -> Self {
        Self {
            kind,
            message: message.into(),
            payload: Some(payload),
        }
    }

    pub(crate) fn missing_config(destination: Destination, field: &'static str) -> Self {
        Self::new(
            FailureKind::MissingConfig { field },
            format!("{} is not configured with {field}", destination.display_name()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    MissingConfig { field: &'static str },
    InvalidEndpoint,
    HttpStatus(u16),
    /// The destination answered 2xx but reported errors in the body.
    Rejected,
    InvalidResponse,
    Timeout,
    Network,
    /// The publish task died before producing a result.
    Internal,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::MissingConfig { field } => write!(f, "missing configuration {field}"),
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Rejected => write!(f, "rejected by destination"),
            FailureKind::InvalidResponse => write!(f, "invalid response"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Internal => write!(f, "internal error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct GenerationError {
    pub kind: GenerationFailureKind,
    /// Upstream message, verbatim where one was available.
    pub message: String,
}

impl GenerationError {
    pub fn new(kind: GenerationFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationFailureKind {
    MissingApiKey,
    InvalidEndpoint,
    HttpStatus(u16),
    Timeout,
    Network,
    EmptyResponse,
    InvalidResponse,
    Internal,
}

impl fmt::Display for GenerationFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationFailureKind::MissingApiKey => write!(f, "missing api key"),
            GenerationFailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            GenerationFailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            GenerationFailureKind::Timeout => write!(f, "timeout"),
            GenerationFailureKind::Network => write!(f, "network error"),
            GenerationFailureKind::EmptyResponse => write!(f, "empty response"),
            GenerationFailureKind::InvalidResponse => write!(f, "invalid response"),
            GenerationFailureKind::Internal => write!(f, "internal error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    GenerationCompleted {
        request_id: RequestId,
        result: Result<String, GenerationError>,
    },
    PublishCompleted {
        destination: Destination,
        result: PublishResult,
    },
}
