use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Third-party platform an article can be published to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    DevTo,
    Hashnode,
    Blogger,
}

impl Destination {
    pub const ALL: [Destination; 3] = [Destination::DevTo, Destination::Hashnode, Destination::Blogger];

    /// Stable identifier used in config files, CLI arguments and result maps.
    pub fn name(self) -> &'static str {
        match self {
            Destination::DevTo => "devto",
            Destination::Hashnode => "hashnode",
            Destination::Blogger => "blogger",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Destination::DevTo => "DEV.to",
            Destination::Hashnode => "Hashnode",
            Destination::Blogger => "Blogger",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown destination '{0}' (expected one of: devto, hashnode, blogger)")]
pub struct UnknownDestination(pub String);

impl FromStr for Destination {
    type Err = UnknownDestination;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "devto" | "dev.to" | "dev" => Ok(Destination::DevTo),
            "hashnode" => Ok(Destination::Hashnode),
            "blogger" => Ok(Destination::Blogger),
            _ => Err(UnknownDestination(s.to_string())),
        }
    }
}
