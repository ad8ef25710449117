use std::collections::BTreeMap;
use std::fmt;

use blogbuddy_core::Destination;
use buddy_logging::mask_secret;

use crate::HttpSettings;

pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Read-only process configuration, built once at start-up.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub http: HttpSettings,
    pub generator: GeneratorConfig,
    pub destinations: BTreeMap<Destination, DestinationConfig>,
}

impl EngineConfig {
    /// Configuration for `destination`, falling back to its default endpoint
    /// without credentials.
    pub fn destination(&self, destination: Destination) -> DestinationConfig {
        self.destinations
            .get(&destination)
            .cloned()
            .unwrap_or_else(|| DestinationConfig::for_destination(destination))
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_key: None,
        }
    }
}

impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &mask_secret(self.api_key.as_deref()))
            .finish()
    }
}

/// Per-destination endpoint and credentials.
///
/// `api_key` is the static credential each destination expects (DEV.to API
/// key, Hashnode personal access token, Blogger OAuth access token).
/// `publication_id` is the Hashnode publication or the Blogger blog id.
#[derive(Clone, PartialEq, Eq)]
pub struct DestinationConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub publication_id: Option<String>,
}

impl DestinationConfig {
    pub fn for_destination(destination: Destination) -> Self {
        Self {
            endpoint: Self::default_endpoint(destination).to_string(),
            api_key: None,
            publication_id: None,
        }
    }

    pub fn default_endpoint(destination: Destination) -> &'static str {
        match destination {
            Destination::DevTo => "https://dev.to/api/articles",
            Destination::Hashnode => "https://gql.hashnode.com",
            Destination::Blogger => "https://www.googleapis.com/blogger/v3",
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_publication_id(mut self, publication_id: impl Into<String>) -> Self {
        self.publication_id = Some(publication_id.into());
        self
    }
}

impl fmt::Debug for DestinationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DestinationConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &mask_secret(self.api_key.as_deref()))
            .field("publication_id", &self.publication_id)
            .finish()
    }
}
