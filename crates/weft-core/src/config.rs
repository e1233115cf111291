//! Configuration types and file handling for the code generator.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs::home_dir;
use serde::{Deserialize, Serialize};
use toml::{from_str, to_string_pretty};
use tracing::debug;

use crate::error::{Error, Result};

/// Complete generator configuration.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct WeftConfig {
    /// API keys for model providers
    pub api_keys: ApiKeys,
}

/// API keys for model providers.
///
/// Values of the exact form `${VAR_NAME}` are resolved against the process
/// environment when the file is loaded; an unset variable resolves to the
/// empty string.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[allow(
    clippy::struct_field_names,
    reason = "Field names mirror the environment variables they fall back to"
)]
pub struct ApiKeys {
    /// `OpenAI` API key
    pub openai_api_key: Option<String>,
    /// Anthropic API key for Claude models
    pub anthropic_api_key: Option<String>,
    /// `OpenRouter` API key for various models
    pub openrouter_api_key: Option<String>,
}

impl ApiKeys {
    /// Resolves `${VAR_NAME}` placeholder values against the process
    /// environment.
    pub fn resolve_placeholders(&mut self) {
        for slot in [
            &mut self.openai_api_key,
            &mut self.anthropic_api_key,
            &mut self.openrouter_api_key,
        ] {
            if let Some(value) = slot.take() {
                *slot = Some(resolve_env_placeholder(value));
            }
        }
    }
}

/// Resolves a value of the exact form `${VAR_NAME}` to that environment
/// variable, or returns the value unchanged.
fn resolve_env_placeholder(value: String) -> String {
    match value.strip_prefix("${").and_then(|rest| rest.strip_suffix('}')) {
        Some(name) => env::var(name).unwrap_or_default(),
        None => value,
    }
}

/// Renders key presence for logging without exposing the value.
fn presence(key: Option<&str>) -> &'static str {
    match key {
        Some(value) if !value.is_empty() => "present",
        _ => "missing",
    }
}

impl WeftConfig {
    /// Get the default config directory path (`~/.weft`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn config_dir() -> Result<PathBuf> {
        let home = home_dir()
            .ok_or_else(|| Error::Other("Could not determine home directory".to_owned()))?;
        Ok(home.join(".weft"))
    }

    /// Get the default config file path (`~/.weft/config.toml`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from the default location (`~/.weft/config.toml`)
    /// If the config doesn't exist, creates it with default values
    ///
    /// # Errors
    /// Returns an error if the config cannot be read or created
    pub fn load_or_create() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            let config = Self::default();
            config.save_to_file(&config_path)?;
            Ok(config)
        }
    }

    /// Load config from a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let mut config: Self = from_str(&contents)?;
        config.api_keys.resolve_placeholders();

        debug!(
            "Loaded config from {path:?}: openai_api_key={}, anthropic_api_key={}, openrouter_api_key={}",
            presence(config.api_keys.openai_api_key.as_deref()),
            presence(config.api_keys.anthropic_api_key.as_deref()),
            presence(config.api_keys.openrouter_api_key.as_deref()),
        );

        Ok(config)
    }

    /// Save config to a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = to_string_pretty(self)
            .map_err(|error| Error::Config(format!("Failed to serialize config: {error}")))?;

        let header = "# Weft Configuration File\n\
                      # This file is automatically generated on first run\n\
                      # Edit this file to customize your settings\n\n";

        fs::write(path, format!("{header}{contents}"))?;

        Ok(())
    }

    /// Get API key for a provider, checking config first, then environment variables
    pub fn get_api_key(&self, provider: &str) -> Option<String> {
        match provider {
            "openai" => self
                .api_keys
                .openai_api_key
                .clone()
                .or_else(|| env::var("OPENAI_API_KEY").ok()),
            "anthropic" => self
                .api_keys
                .anthropic_api_key
                .clone()
                .or_else(|| env::var("ANTHROPIC_API_KEY").ok()),
            "openrouter" => self
                .api_keys
                .openrouter_api_key
                .clone()
                .or_else(|| env::var("OPENROUTER_API_KEY").ok()),
            _ => None,
        }
    }
}
