//! Configuration management for zenboard
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{CONFIG_GENERATED, DEFAULT_AI_MODEL, DEFAULT_TASKS_TABLE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub remote: RemoteConfig,
    pub ai: AiConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Icon theme: "ascii", "unicode", or "emoji"
    pub icon_theme: String,
    /// Ask before deleting a task
    pub confirm_delete: bool,
}

/// Remote task store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Project base URL, e.g. "https://xyzcompany.supabase.co"
    pub url: String,
    /// Environment variable holding the store API key
    pub api_key_env: String,
    /// Name of the tasks table
    pub table: String,
}

/// Language-model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Environment variable holding the model API key (empty value disables AI actions)
    pub api_key_env: String,
    /// Model identifier
    pub model: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            icon_theme: "ascii".to_string(),
            confirm_delete: true,
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key_env: "ZENBOARD_STORE_KEY".to_string(),
            table: DEFAULT_TASKS_TABLE.to_string(),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "ZENBOARD_AI_KEY".to_string(),
            model: DEFAULT_AI_MODEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
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
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("zenboard.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("zenboard").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        match self.ui.icon_theme.as_str() {
            "ascii" | "unicode" | "emoji" => {}
            theme => anyhow::bail!("icon_theme must be ascii, unicode or emoji, got '{theme}'"),
        }

        if !self.remote.url.is_empty() && !self.remote.url.starts_with("http") {
            anyhow::bail!("remote url must be an http(s) URL, got '{}'", self.remote.url);
        }

        if self.remote.api_key_env.is_empty() {
            anyhow::bail!("remote api_key_env cannot be empty");
        }

        if self.remote.table.is_empty() {
            anyhow::bail!("remote table cannot be empty");
        }

        if self.ai.model.is_empty() {
            anyhow::bail!("ai model cannot be empty");
        }

        Ok(())
    }

    /// Resolve the remote store API key from the configured environment variable
    #[must_use]
    pub fn remote_api_key(&self) -> Option<String> {
        std::env::var(&self.remote.api_key_env).ok().filter(|k| !k.is_empty())
    }

    /// Resolve the model API key; an unset or empty variable disables AI actions
    #[must_use]
    pub fn ai_api_key(&self) -> String {
        std::env::var(&self.ai.api_key_env).unwrap_or_default()
    }

    /// Remote URL, overridable through ZENBOARD_STORE_URL for ad-hoc runs
    #[must_use]
    pub fn remote_url(&self) -> String {
        std::env::var("ZENBOARD_STORE_URL").unwrap_or_else(|_| self.remote.url.clone())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Zenboard Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
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
            .map(|dir| dir.join("zenboard"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
