//! Engine configuration.
//!
//! Everything here is optional; `EngineConfig::default()` reproduces the
//! behavior of the original search filter screen.

use crate::state::SelectionPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_PLACEHOLDER: &str = "Buscar...";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub selection_policy: SelectionPolicy,
    /// Hint text the host shows in an empty query field
    pub placeholder: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            selection_policy: SelectionPolicy::default(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn with_selection_policy(mut self, policy: SelectionPolicy) -> Self {
        self.selection_policy = policy;
        self
    }
}
