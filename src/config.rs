//! User configuration loaded from `config.toml`.
//!
//! The file is optional. Missing keys take their defaults, so an empty file
//! and no file behave the same.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable read for the render service bearer token by default.
pub const DEFAULT_TOKEN_ENV: &str = "FIELDOBS_RENDER_TOKEN";

pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120; // Total request timeout (includes connection + transfer)
pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 50 * 1024 * 1024; // 50MB

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
}

/// Settings for the document rendering service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    /// API root, e.g. `https://docs.example.com/v1`. Rendering is unavailable
    /// until this is set.
    pub base_url: Option<String>,
    /// Name of the environment variable holding the bearer token
    pub token_env: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_document_bytes: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

impl RenderConfig {
    /// Bearer token from the configured environment variable.
    ///
    /// Unset and blank values both count as missing.
    pub fn token(&self) -> Option<String> {
        std::env::var(&self.token_env)
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }
}

impl Config {
    /// `<config dir>/fieldobs/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fieldobs").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one the default location is
    /// tried and silently skipped when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::from_file(&default),
                _ => {
                    debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid config.toml")
    }
}
