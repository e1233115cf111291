use std::fmt;

use weft_core::{Error, Result};

use crate::provider::{ApiCredentials, Provider};
use crate::resolve::{env_lookup, require_key, resolve_key};

/// Env var key for the `OpenRouter` API key.
const ENV_OPENROUTER_API_KEY: &str = "OPENROUTER_API_KEY";

/// Resolved credentials for the `OpenRouter` API.
pub struct OpenRouterCredentials {
    /// `OpenRouter` API key.
    api_key: String,
}

impl OpenRouterCredentials {
    /// Creates credentials from the given API key.
    ///
    /// # Errors
    /// Returns an error if the provided API key is empty.
    pub fn new(api_key: String) -> Result<Self> {
        if api_key.is_empty() {
            return Err(Error::MissingApiKey(ENV_OPENROUTER_API_KEY.to_owned()));
        }

        Ok(Self { api_key })
    }

    /// Creates credentials from the `OPENROUTER_API_KEY` environment variable.
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
        require_key(explicit, ENV_OPENROUTER_API_KEY, lookup).map(|api_key| Self { api_key })
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
            api_key: resolve_key(explicit, ENV_OPENROUTER_API_KEY, lookup),
        }
    }
}

impl ApiCredentials for OpenRouterCredentials {
    fn provider(&self) -> Provider {
        Provider::OpenRouter
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for OpenRouterCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenRouterCredentials")
            .field("api_key", &self.masked())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(
        clippy::expect_used,
        clippy::unwrap_used,
        reason = "Test code is allowed to use expect/unwrap"
    )]

    use super::*;

    #[test]
    fn test_new_with_empty_api_key() {
        let result = OpenRouterCredentials::new(String::new());
        assert!(result.is_err(), "Empty API key should return an error");
    }

    #[test]
    fn test_resolve_with_lookup_value() {
        let lookup = |name: &str| (name == "OPENROUTER_API_KEY").then(|| "sk-or-env".to_owned());
        let credentials = OpenRouterCredentials::resolve_with(None, lookup);
        assert_eq!(credentials.api_key(), "sk-or-env");
    }

    #[test]
    fn test_resolve_with_nothing_configured() {
        let credentials = OpenRouterCredentials::resolve_with(None, |_name| None);
        assert_eq!(credentials.api_key(), "");
    }

    #[test]
    fn test_masked_shows_tail_only() {
        let credentials =
            OpenRouterCredentials::new("sk-or-v1-abcdef5678".to_owned()).expect("valid key");
        assert_eq!(credentials.masked(), "...5678");

        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("sk-or-v1-abcdef5678"));
    }
}
