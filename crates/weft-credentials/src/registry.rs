//! Credential discovery across known providers.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info};
use weft_core::{Error, Result};

use crate::provider::Provider;
use crate::resolve::env_lookup;

/// Registry of API keys discovered for known providers.
///
/// Providers whose variable is unset or empty are simply absent; callers
/// decide whether that is an error via [`CredentialRegistry::require`].
#[derive(Default, Clone)]
pub struct CredentialRegistry {
    /// Discovered API keys by provider.
    api_keys: HashMap<Provider, String>,
}

impl CredentialRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovers keys for all known providers from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    /// Discovers keys for all known providers via the given lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut registry = Self::new();

        for provider in Provider::all() {
            match lookup(provider.env_var()) {
                Some(api_key) if !api_key.is_empty() => {
                    info!("Found {} API key", provider.name());
                    registry.api_keys.insert(provider, api_key);
                }
                _ => debug!("No {} API key configured", provider.name()),
            }
        }

        registry
    }

    /// Injects an explicit key for `provider`, replacing any discovered value.
    pub fn set_api_key(&mut self, provider: Provider, api_key: String) {
        self.api_keys.insert(provider, api_key);
    }

    /// Returns the key for `provider`, if one was discovered.
    pub fn get(&self, provider: Provider) -> Option<&str> {
        self.api_keys.get(&provider).map(String::as_str)
    }

    /// Returns the key for `provider`.
    ///
    /// # Errors
    /// Returns [`Error::MissingApiKey`] naming the provider's environment
    /// variable when no key was discovered.
    pub fn require(&self, provider: Provider) -> Result<&str> {
        self.get(provider)
            .ok_or_else(|| Error::MissingApiKey(provider.env_var().to_owned()))
    }

    /// Whether a key was discovered for `provider`.
    pub fn is_configured(&self, provider: Provider) -> bool {
        self.api_keys.contains_key(&provider)
    }

    /// The providers with a discovered key, in display order.
    pub fn configured(&self) -> Vec<Provider> {
        Provider::all()
            .into_iter()
            .filter(|provider| self.is_configured(*provider))
            .collect()
    }
}

impl fmt::Debug for CredentialRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRegistry")
            .field("configured", &self.configured())
            .finish()
    }
}
