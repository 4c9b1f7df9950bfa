//! Configuration management for clickup-tasks
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_API_BASE_URL, DEFAULT_LOG_FILE_NAME,
    DEFAULT_TOKEN_ENV, LOCAL_CONFIG_FILE_NAME, MAX_TIMEOUT_SECS,
};
use crate::utils::style;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub cache: CacheConfig,
    pub sync: SyncConfig,
    pub style: StyleConfig,
    pub logging: LoggingConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Personal API token. Takes precedence over `token_env` when set.
    pub token: Option<String>,
    /// Environment variable holding the API token
    pub token_env: String,
    /// Base URL of the ClickUp v2 API
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

/// Cache location
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache root; defaults to `$XDG_CACHE_HOME/clickup`
    pub dir: Option<PathBuf>,
}

/// Sync configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SyncConfig {
    /// Refetch the whole hierarchy on every run
    pub always: bool,
}

/// Table styling. Each entry is a color (`red`, `lightblue`, `#ff8800`) or a
/// modifier (`bold`, `dim`, `italic`, `underline`, `inverse`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub head: Vec<String>,
    pub border: Vec<String>,
    pub tasks: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write debug logs to a file
    pub enabled: bool,
    /// Level for messages printed to stderr
    pub level: String,
    /// Log file; defaults to `tasks.log` in the cache root
    pub file: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            token: None,
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            head: vec!["red".to_string()],
            border: vec!["gray".to_string()],
            tasks: Vec::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl ApiConfig {
    /// Resolve the API token from the config file or the environment.
    pub fn resolve_token(&self) -> Result<String> {
        if let Some(token) = self.token.as_deref().filter(|t| !t.trim().is_empty()) {
            return Ok(token.trim().to_string());
        }

        match std::env::var(&self.token_env) {
            Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => anyhow::bail!(
                "No API token configured: set api.token in the config file or export {}",
                self.token_env
            ),
        }
    }
}

impl Config {
    /// Load configuration from an explicit path, the usual locations, or defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        let xdg_config = Self::get_default_config_path().ok()?;
        xdg_config.exists().then_some(xdg_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            anyhow::bail!("api.base_url cannot be empty");
        }
        if self.api.token_env.trim().is_empty() && self.api.token.is_none() {
            anyhow::bail!("api.token_env cannot be empty when api.token is not set");
        }
        if self.api.timeout_secs == 0 || self.api.timeout_secs > MAX_TIMEOUT_SECS {
            anyhow::bail!(
                "api.timeout_secs must be between 1 and {}, got {}",
                MAX_TIMEOUT_SECS,
                self.api.timeout_secs
            );
        }

        for (section, names) in [
            ("head", &self.style.head),
            ("border", &self.style.border),
            ("tasks", &self.style.tasks),
        ] {
            if let Err(e) = style::parse_style(names) {
                anyhow::bail!("Invalid style.{}: {}", section, e);
            }
        }

        if let Err(e) = log::LevelFilter::from_str(&self.logging.level) {
            anyhow::bail!("Invalid logging.level '{}': {}", self.logging.level, e);
        }

        Ok(())
    }

    /// Cache root, from config or the XDG cache directory
    pub fn cache_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.cache.dir {
            return Ok(dir.clone());
        }
        dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Log file path, from config or inside the cache root
    pub fn log_file(&self) -> Result<PathBuf> {
        match &self.logging.file {
            Some(file) => Ok(file.clone()),
            None => Ok(self.cache_dir()?.join(DEFAULT_LOG_FILE_NAME)),
        }
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# clickup-tasks configuration file\n# Generated on {}\n# The API token can also be exported as {}\n\n",
            chrono::Local::now().format("%Y-%m-%d"),
            DEFAULT_TOKEN_ENV
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }
}
