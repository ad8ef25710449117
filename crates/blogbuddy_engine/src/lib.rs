//! BlogBuddy engine: generator client, publishing adapters and the
//! background executor that runs them.
mod config;
mod dispatch;
mod engine;
mod generate;
mod http;
mod publish;
mod types;

pub use config::{
    DestinationConfig, EngineConfig, GeneratorConfig, DEFAULT_GEMINI_ENDPOINT,
    DEFAULT_GEMINI_MODEL,
};
pub use dispatch::{dispatch_all, dispatch_one};
pub use engine::{EngineError, EngineHandle};
pub use generate::{GeminiGenerator, Generator};
pub use http::HttpSettings;
pub use publish::{publisher_for, BloggerPublisher, DevToPublisher, HashnodePublisher, Publisher};
pub use types::{
    EngineEvent, FailureKind, GenerationError, GenerationFailureKind, PublishError, PublishResult,
    Published,
};
