//! Alias generation and validation utilities.
//!
//! Generated aliases are random alphanumeric strings of a configured length.
//! Aliases chosen by users are validated for length, characters and routing
//! collisions.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Maximum length of a user-chosen alias.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Aliases that would shadow a fixed route.
pub const RESERVED_ALIASES: &[&str] = &["url", "register", "login", "health"];

static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias pattern is valid"));

/// Generates a random alphanumeric alias of exactly `length` characters.
///
/// Uses the thread-local CSPRNG, so aliases are not guessable from earlier ones.
pub fn generate_alias(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Generates aliases with `generate` until one is not a reserved route name.
pub fn generate_unreserved_alias(
    length: usize,
    mut generate: impl FnMut(usize) -> String,
) -> String {
    loop {
        let alias = generate(length);
        if !is_reserved(&alias) {
            return alias;
        }
    }
}

/// Returns true if `alias` matches a reserved route name, ignoring case.
pub fn is_reserved(alias: &str) -> bool {
    RESERVED_ALIASES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(alias))
}

/// Validates a user-provided alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route name (case-insensitive)
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() || alias.len() > MAX_ALIAS_LENGTH {
        return Err(AppError::bad_request(
            format!("Alias must be 1-{} characters", MAX_ALIAS_LENGTH),
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !ALIAS_REGEX.is_match(alias) {
        return Err(AppError::bad_request(
            "Alias can only contain letters, digits, hyphens and underscores",
            json!({ "alias": alias }),
        ));
    }

    if is_reserved(alias) {
        return Err(AppError::bad_request(
            "bad alias: this alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_alias_has_requested_length() {
        assert_eq!(generate_alias(6).len(), 6);
        assert_eq!(generate_alias(12).len(), 12);
    }

    #[test]
    fn test_generate_alias_is_alphanumeric() {
        let alias = generate_alias(32);
        assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_alias_produces_distinct_values() {
        let aliases: HashSet<String> = (0..1000).map(|_| generate_alias(10)).collect();
        assert_eq!(aliases.len(), 1000);
    }

    #[test]
    fn test_generated_alias_passes_validation() {
        for _ in 0..100 {
            let alias = generate_unreserved_alias(6, generate_alias);
            assert!(validate_alias(&alias).is_ok());
        }
    }

    #[test]
    fn test_generate_unreserved_alias_skips_reserved_names() {
        let mut candidates = vec!["abc123", "HEALTH", "health"].into_iter();
        let mut calls = 0;

        let alias = generate_unreserved_alias(6, |_| {
            calls += 1;
            candidates.next_back().unwrap().to_string()
        });

        assert_eq!(alias, "abc123");
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_validate_short_alias() {
        assert!(validate_alias("ex1").is_ok());
        assert!(validate_alias("a").is_ok());
    }

    #[test]
    fn test_validate_mixed_chars() {
        assert!(validate_alias("My_Link-2024").is_ok());
    }

    #[test]
    fn test_validate_empty() {
        assert!(validate_alias("").is_err());
    }

    #[test]
    fn test_validate_too_long() {
        let alias = "a".repeat(MAX_ALIAS_LENGTH + 1);
        let err = validate_alias(&alias).unwrap_err();
        assert!(err.to_string().contains("1-64 characters"));
    }

    #[test]
    fn test_validate_rejects_slash_and_spaces() {
        assert!(validate_alias("a/b").is_err());
        assert!(validate_alias("my link").is_err());
        assert!(validate_alias("ссылка").is_err());
    }

    #[test]
    fn test_validate_all_reserved_aliases() {
        for &reserved in RESERVED_ALIASES {
            let result = validate_alias(reserved);
            assert!(
                matches!(result, Err(AppError::Validation { .. })),
                "Reserved alias '{}' should be invalid",
                reserved
            );
        }
    }

    #[test]
    fn test_validate_reserved_is_case_insensitive() {
        assert!(validate_alias("Register").is_err());
        assert!(validate_alias("LOGIN").is_err());
    }
}
