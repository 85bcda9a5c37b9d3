pub mod defaults;
mod insights_config;
mod observability_config;

pub use insights_config::InsightsConfig;
pub use observability_config::ObservabilityConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{SkepesisError, SkepesisResult};

/// Top-level configuration. Every section falls back to its defaults when
/// omitted, so an empty file is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkepesisConfig {
    pub insights: InsightsConfig,
    pub observability: ObservabilityConfig,
}

impl SkepesisConfig {
    /// Parse a TOML string.
    pub fn from_toml(input: &str) -> SkepesisResult<Self> {
        toml::from_str(input).map_err(|e| SkepesisError::ConfigError {
            reason: e.to_string(),
        })
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> SkepesisResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SkepesisError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }
}
