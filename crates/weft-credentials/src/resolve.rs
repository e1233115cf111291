//! Key resolution and masking helpers shared by the credential types.
//!
//! Resolution takes the environment as an injectable lookup function rather
//! than reading process state directly, so callers and tests can substitute
//! their own key-value mapping.

use std::env;

use weft_core::{Error, Result};

/// Looks up a variable in the process environment.
///
/// Adapter for the lookup parameter taken by [`resolve_key`] and
/// [`require_key`].
pub fn env_lookup(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// Resolves a key from an explicit value or a lookup, never failing.
///
/// A non-empty explicit value wins outright. Otherwise the lookup is
/// consulted with `env_name`, and an absent result resolves to the empty
/// string.
pub fn resolve_key(
    explicit: Option<String>,
    env_name: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> String {
    explicit
        .filter(|key| !key.is_empty())
        .or_else(|| lookup(env_name))
        .unwrap_or_default()
}

/// Resolves a key like [`resolve_key`], failing when the result is empty.
///
/// # Errors
/// Returns [`Error::MissingApiKey`] naming `env_name` when neither the
/// explicit value nor the lookup yields a non-empty key.
pub fn require_key(
    explicit: Option<String>,
    env_name: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String> {
    let key = resolve_key(explicit, env_name, lookup);
    if key.is_empty() {
        return Err(Error::MissingApiKey(env_name.to_owned()));
    }
    Ok(key)
}

/// Renders a key for display, hiding all but the last four characters.
///
/// Keys of eight characters or fewer are hidden entirely.
pub fn mask_key(key: &str) -> String {
    let count = key.chars().count();
    if count <= 8 {
        return "...".to_owned();
    }
    let tail: String = key.chars().skip(count - 4).collect();
    format!("...{tail}")
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
    fn test_explicit_key_wins() {
        let lookup = |_name: &str| Some("from-lookup".to_owned());
        let key = resolve_key(Some("explicit-key".to_owned()), "SOME_KEY", lookup);
        assert_eq!(key, "explicit-key");
    }

    #[test]
    fn test_empty_explicit_falls_through_to_lookup() {
        let lookup = |name: &str| (name == "SOME_KEY").then(|| "from-lookup".to_owned());
        let key = resolve_key(Some(String::new()), "SOME_KEY", lookup);
        assert_eq!(key, "from-lookup");
    }

    #[test]
    fn test_unset_resolves_to_empty() {
        let key = resolve_key(None, "SOME_KEY", |_name| None);
        assert_eq!(key, "");
    }

    #[test]
    fn test_require_key_success() {
        let lookup = |name: &str| (name == "SOME_KEY").then(|| "sk-value".to_owned());
        let key = require_key(None, "SOME_KEY", lookup).expect("key should resolve");
        assert_eq!(key, "sk-value");
    }

    #[test]
    fn test_require_key_missing() {
        let result = require_key(None, "SOME_KEY", |_name| None);
        match result {
            Err(Error::MissingApiKey(name)) => assert_eq!(name, "SOME_KEY"),
            other => panic!("expected MissingApiKey, got {other:?}"),
        }
    }

    #[test]
    fn test_require_key_rejects_empty_lookup_value() {
        let result = require_key(None, "SOME_KEY", |_name| Some(String::new()));
        assert!(matches!(result, Err(Error::MissingApiKey(_))));
    }

    #[test]
    fn test_mask_key_long() {
        assert_eq!(mask_key("sk-abcdefgh1234"), "...1234");
    }

    #[test]
    fn test_mask_key_short() {
        assert_eq!(mask_key("short"), "...");
        assert_eq!(mask_key(""), "...");
    }
}
