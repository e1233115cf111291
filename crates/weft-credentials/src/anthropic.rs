use std::fmt;

use weft_core::{Error, Result};

use crate::provider::{ApiCredentials, Provider};
use crate::resolve::{env_lookup, require_key, resolve_key};

/// Env var key for the Anthropic API key.
const ENV_ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";

/// Resolved credentials for the Anthropic API.
pub struct AnthropicCredentials {
    /// Anthropic API key.
    api_key: String,
}

impl AnthropicCredentials {
    /// Creates credentials from the given API key.
    ///
    /// # Errors
    /// Returns an error if the provided API key is empty.
    pub fn new(api_key: String) -> Result<Self> {
        if api_key.is_empty() {
            return Err(Error::MissingApiKey(ENV_ANTHROPIC_API_KEY.to_owned()));
        }

        Ok(Self { api_key })
    }

    /// Creates credentials from the `ANTHROPIC_API_KEY` environment variable.
    ///
    /// # Errors
    /// Returns an error if the env var is missing or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(None, env_lookup)
    }

    /// Creates credentials from config or environment.
    ///
    /// A non-empty `config_key` wins over the environment.
    ///
    /// # Errors
    /// Returns an error if the API key is not provided by either source.
    pub fn from_config_or_env(config_key: Option<String>) -> Result<Self> {
        Self::from_lookup(config_key, env_lookup)
    }

    /// Creates credentials from an explicit value or the given lookup.
    ///
    /// # Errors
    /// Returns an error if resolution yields an empty key.
    pub fn from_lookup(
        explicit: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        require_key(explicit, ENV_ANTHROPIC_API_KEY, lookup).map(|api_key| Self { api_key })
    }

    /// Resolves credentials permissively from the process environment.
    ///
    /// Falls back to the empty string when nothing is configured; callers
    /// must check before use.
    #[must_use]
    pub fn resolve(explicit: Option<String>) -> Self {
        Self::resolve_with(explicit, env_lookup)
    }

    /// Resolves credentials permissively via the given lookup.
    #[must_use]
    pub fn resolve_with(explicit: Option<String>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_key: resolve_key(explicit, ENV_ANTHROPIC_API_KEY, lookup),
        }
    }
}

impl ApiCredentials for AnthropicCredentials {
    fn provider(&self) -> Provider {
        Provider::Anthropic
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for AnthropicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnthropicCredentials")
            .field("api_key", &self.masked())
            .finish()
    }
}
