//! Configuration management for the portfolio pipeline.
//!
//! This module handles loading and parsing configuration from TOML files,
//! with sensible defaults for all settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Largest page GitHub serves for a repository listing
pub const MAX_PER_PAGE: u32 = 100;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Data directory settings
    #[serde(default)]
    pub data: DataConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// GitHub retrieval settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Deployment settings for the rendered page
    #[serde(default)]
    pub site: SiteConfig,
}

/// Data directory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Root data directory path
    pub root_dir: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log directory path (relative to data directory or absolute)
    pub log_dir: String,

    /// Default log level (trace, debug, info, warn, error)
    pub default_level: String,

    /// Enable console output
    pub console: bool,

    /// Enable file output
    pub file: bool,

    /// Enable JSON formatting for file logs
    pub json_format: bool,
}

/// GitHub repository listing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Account whose public repositories are listed
    pub account: String,

    /// GitHub REST API base URL
    pub base_url: String,

    /// Sort order requested from the listing endpoint
    pub sort: String,

    /// Page size (clamped to 1..=100)
    pub per_page: u32,

    /// Timeout for the first attempt in milliseconds
    pub primary_timeout_ms: u64,

    /// Timeout for the retry in milliseconds
    pub retry_timeout_ms: u64,

    /// Media type requested on the first attempt only
    pub accept_header: Option<String>,

    /// User agent sent with every request (GitHub rejects requests without one)
    pub user_agent: String,

    /// Repository hidden from the listing (defaults to the profile repository)
    pub excluded_repository: Option<String>,
}

/// Deployment path configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Path prefix the site is served under, e.g. "/github"
    pub base_path: Option<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            root_dir: "data".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            default_level: "info".to_string(),
            console: true,
            file: false,
            json_format: false,
        }
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            account: "AleFuzeti".to_string(),
            base_url: "https://api.github.com".to_string(),
            sort: "updated".to_string(),
            per_page: MAX_PER_PAGE,
            primary_timeout_ms: 10_000,
            retry_timeout_ms: 8_000,
            accept_header: Some("application/vnd.github.v3+json".to_string()),
            user_agent: "meu-portfolio/0.1.0".to_string(),
            excluded_repository: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// If the file doesn't exist, returns the default configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "Config file not found, using defaults"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Load configuration from a TOML file or create default if not found
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::from_file(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load config, using defaults");
            Self::default()
        })
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            "Configuration saved successfully"
        );

        Ok(())
    }

    /// Get the path for the data directory
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.data.root_dir)
    }

    /// Get the path for the log directory
    pub fn log_dir(&self) -> PathBuf {
        let log_path = Path::new(&self.logging.log_dir);
        if log_path.is_absolute() {
            log_path.to_path_buf()
        } else {
            self.data_dir().join(log_path)
        }
    }
}

impl GitHubConfig {
    /// Listing endpoint with sort and page size query parameters
    pub fn repos_url(&self) -> String {
        format!(
            "{}/users/{}/repos?sort={}&per_page={}",
            self.base_url.trim_end_matches('/'),
            self.account,
            self.sort,
            self.per_page.clamp(1, MAX_PER_PAGE)
        )
    }

    /// Repository excluded from the listing
    pub fn excluded_repository(&self) -> &str {
        self.excluded_repository.as_deref().unwrap_or(&self.account)
    }

    pub fn primary_timeout(&self) -> Duration {
        Duration::from_millis(self.primary_timeout_ms)
    }

    pub fn retry_timeout(&self) -> Duration {
        Duration::from_millis(self.retry_timeout_ms)
    }
}

impl SiteConfig {
    /// Prefix for assets and links, e.g. "/github/" (or "/" at the root)
    pub fn asset_prefix(&self) -> String {
        match self.base_path.as_deref().map(|p| p.trim_matches('/')) {
            Some(path) if !path.is_empty() => format!("/{}/", path),
            _ => "/".to_string(),
        }
    }
}
