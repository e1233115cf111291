//! Provider identifiers and the credential capability contract.

use serde::{Deserialize, Serialize};

use crate::resolve::mask_key;

/// Model providers the generator can hold credentials for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// `OpenAI` API
    OpenAi,
    /// Anthropic API (Claude models)
    Anthropic,
    /// `OpenRouter` API
    OpenRouter,
}

impl Provider {
    /// Get the lowercase identifier for this provider.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::OpenRouter => "openrouter",
        }
    }

    /// Get the environment variable consulted for this provider's key.
    #[must_use]
    pub const fn env_var(&self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Anthropic => "ANTHROPIC_API_KEY",
            Self::OpenRouter => "OPENROUTER_API_KEY",
        }
    }

    /// All known providers, in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::OpenAi, Self::Anthropic, Self::OpenRouter]
    }
}

/// Capability contract for resolved API credentials.
///
/// The secret is fixed at construction, so accessor calls are idempotent and
/// safe from any number of concurrent callers.
pub trait ApiCredentials {
    /// Provider this credential authenticates against.
    fn provider(&self) -> Provider;

    /// Returns the resolved secret.
    fn api_key(&self) -> &str;

    /// Returns the secret in masked form, safe for display.
    fn masked(&self) -> String {
        mask_key(self.api_key())
    }
}
