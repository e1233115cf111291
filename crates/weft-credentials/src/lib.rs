//! Credential providers for external model services.
//!
//! Each provider resolves a single API key from an explicit value, a
//! configuration entry, or its environment variable, under either a strict
//! policy (missing keys are an error) or a permissive one (missing keys
//! resolve to the empty string).

/// Anthropic credential implementation.
pub mod anthropic;
/// `OpenAI` credential implementation.
pub mod openai;
/// `OpenRouter` credential implementation.
pub mod openrouter;
/// Provider identifiers and the credential capability contract.
pub mod provider;
/// Credential discovery across known providers.
pub mod registry;
/// Key resolution and masking helpers.
pub mod resolve;

pub use anthropic::AnthropicCredentials;
pub use openai::OpenAiCredentials;
pub use openrouter::OpenRouterCredentials;
pub use provider::{ApiCredentials, Provider};
pub use registry::CredentialRegistry;
pub use resolve::{env_lookup, mask_key, require_key, resolve_key};
