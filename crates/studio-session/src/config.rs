//! Studio configuration
//!
//! Read from a TOML file, then overridden by `STUDIO_*` environment
//! variables. Missing keys keep their defaults.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use studio_llm::LlmConfig;

/// Overrides [`LlmConfig::endpoint`]
pub const ENV_LLM_ENDPOINT: &str = "STUDIO_LLM_ENDPOINT";
/// Overrides [`LlmConfig::model`]
pub const ENV_LLM_MODEL: &str = "STUDIO_LLM_MODEL";
/// Overrides [`StudioConfig::data_dir`]
pub const ENV_DATA_DIR: &str = "STUDIO_DATA_DIR";

pub const DEFAULT_DATA_DIR: &str = ".studio";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub llm: LlmConfig,
    /// Directory holding one JSON file per storage key
    pub data_dir: PathBuf,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl StudioConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_llm(mut self, llm: LlmConfig) -> Self {
        self.llm = llm;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Parse a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// File (if given) plus process environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    /// Apply `STUDIO_*` overrides looked up through `lookup`
    #[must_use]
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(endpoint) = non_empty(ENV_LLM_ENDPOINT) {
            tracing::debug!(%endpoint, "endpoint overridden from environment");
            self.llm.endpoint = endpoint;
        }
        if let Some(model) = non_empty(ENV_LLM_MODEL) {
            tracing::debug!(%model, "model overridden from environment");
            self.llm.model = model;
        }
        if let Some(dir) = non_empty(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(dir);
        }
        self
    }
}
