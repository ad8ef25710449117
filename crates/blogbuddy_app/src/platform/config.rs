use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use blogbuddy_core::{Destination, UnknownDestination};
use blogbuddy_engine::{DestinationConfig, EngineConfig};
use buddy_logging::{buddy_debug, buddy_info};
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG_FILENAME: &str = "blogbuddy.ron";

const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
const GEMINI_MODEL: &str = "GEMINI_MODEL";
const DEVTO_API_KEY: &str = "DEVTO_API_KEY";
const HASHNODE_TOKEN: &str = "HASHNODE_TOKEN";
const HASHNODE_PUBLICATION_ID: &str = "HASHNODE_PUBLICATION_ID";
const BLOGGER_ACCESS_TOKEN: &str = "BLOGGER_ACCESS_TOKEN";
const BLOGGER_BLOG_ID: &str = "BLOGGER_BLOG_ID";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error(transparent)]
    UnknownDestination(#[from] UnknownDestination),
}

/// Non-secret settings that may live in a RON file. Credentials only come
/// from the environment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    http: HttpSection,
    generator: GeneratorSection,
    destinations: BTreeMap<String, DestinationSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct HttpSection {
    connect_timeout_secs: Option<u64>,
    request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct GeneratorSection {
    endpoint: Option<String>,
    model: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DestinationSection {
    endpoint: Option<String>,
    publication_id: Option<String>,
}

/// Build the engine configuration: optional RON file first, then the
/// environment (a `.env` file is honoured).
///
/// An explicit `path` must exist; without one, `./blogbuddy.ron` is used
/// when present.
pub(crate) fn load_config(path: Option<&Path>) -> Result<EngineConfig, ConfigError> {
    // Allow dotenv files to populate env vars when present.
    dotenvy::dotenv().ok();

    let file = match path {
        Some(path) => read_file_config(path)?,
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILENAME);
            if default_path.is_file() {
                read_file_config(&default_path)?
            } else {
                FileConfig::default()
            }
        }
    };

    build_config(file, |key| std::env::var(key).ok())
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    buddy_info!("Loaded config file {:?}", path);
    Ok(config)
}

fn build_config(
    file: FileConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<EngineConfig, ConfigError> {
    let env = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let mut config = EngineConfig::default();
    config.http.connect_timeout = file.http.connect_timeout_secs.map(Duration::from_secs);
    config.http.request_timeout = file.http.request_timeout_secs.map(Duration::from_secs);

    if let Some(endpoint) = file.generator.endpoint {
        config.generator.endpoint = endpoint;
    }
    if let Some(model) = env(GEMINI_MODEL).or(file.generator.model) {
        config.generator.model = model;
    }
    config.generator.api_key = env(GEMINI_API_KEY);

    let mut sections = BTreeMap::new();
    for (name, section) in file.destinations {
        sections.insert(name.parse::<Destination>()?, section);
    }

    for destination in Destination::ALL {
        let section = sections.remove(&destination).unwrap_or_default();
        let (key_var, publication_var) = match destination {
            Destination::DevTo => (DEVTO_API_KEY, None),
            Destination::Hashnode => (HASHNODE_TOKEN, Some(HASHNODE_PUBLICATION_ID)),
            Destination::Blogger => (BLOGGER_ACCESS_TOKEN, Some(BLOGGER_BLOG_ID)),
        };

        let mut destination_config = DestinationConfig::for_destination(destination);
        if let Some(endpoint) = section.endpoint {
            destination_config.endpoint = endpoint;
        }
        destination_config.api_key = env(key_var);
        destination_config.publication_id = publication_var
            .and_then(|var| env(var))
            .or(section.publication_id);

        buddy_debug!("Destination {} configured as {:?}", destination, destination_config);
        config.destinations.insert(destination, destination_config);
    }

    Ok(config)
}
