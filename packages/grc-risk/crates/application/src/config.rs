//! Where the client finds the risk service.
//!
//! Precedence: explicit flag, then `GRC_API_URL`, then the config file, then
//! the local default.

use crate::error::GatewayError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const API_URL_ENV: &str = "GRC_API_URL";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Contents of `~/.config/grc-risk/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            ..Self::default()
        })
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("grc-risk").join("config.toml"))
    }

    /// Resolves the configuration from the process environment and the
    /// default config file location.
    pub fn from_env(flag: Option<&str>) -> Result<Self> {
        let env = std::env::var(API_URL_ENV).ok();
        let path = Self::default_path();
        Self::resolve(flag, env.as_deref(), path.as_deref())
    }

    pub fn resolve(flag: Option<&str>, env: Option<&str>, file: Option<&Path>) -> Result<Self> {
        let file = match file {
            Some(path) if path.exists() => ConfigFile::load(path)?,
            _ => ConfigFile::default(),
        };

        let raw = flag
            .or(env)
            .filter(|url| !url.trim().is_empty())
            .map(str::to_string)
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let mut config = Self::new(&raw)?;
        if let Some(secs) = file.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }

        tracing::debug!(base_url = %config.base_url, "Resolved risk service URL");
        Ok(config)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Strips trailing slashes and checks the URL is absolute http(s).
pub fn normalize_base_url(raw: &str) -> Result<String, GatewayError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| GatewayError::InvalidUrl(format!("{}: {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(GatewayError::InvalidUrl(format!(
            "{}: unsupported scheme '{}'",
            raw, other
        ))),
    }
}
