//! Alias generation and validation utilities.
//!
//! Random aliases are drawn from a 62-symbol alphabet. They are not unique by
//! construction: a collision surfaces as an alias conflict from the registry and
//! must be handled by the caller.

use rand::Rng;

/// Alias length used when the caller does not configure one.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Upper bound for user supplied aliases.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Symbols a generated alias is drawn from.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Aliases that would shadow a service route.
const RESERVED_ALIASES: &[&str] = &["url", "health"];

/// Generates a random alias of exactly `length` characters.
///
/// Each character is chosen uniformly from [`ALPHABET`].
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

/// Reasons a user supplied alias is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AliasValidationError {
    #[error("alias must not be empty")]
    Empty,

    #[error("alias must be at most {MAX_ALIAS_LENGTH} characters")]
    TooLong,

    #[error("alias can only contain letters, digits, '-' and '_'")]
    InvalidCharacters,

    #[error("alias '{0}' is reserved")]
    Reserved(String),
}

/// Validates a user supplied alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, hyphens, underscores
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns the first [`AliasValidationError`] that applies.
pub fn validate_alias(alias: &str) -> Result<(), AliasValidationError> {
    if alias.is_empty() {
        return Err(AliasValidationError::Empty);
    }

    if alias.len() > MAX_ALIAS_LENGTH {
        return Err(AliasValidationError::TooLong);
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AliasValidationError::InvalidCharacters);
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AliasValidationError::Reserved(alias.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_has_62_distinct_symbols() {
        let mut symbols = ALPHABET.to_vec();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), 62);
    }

    #[test]
    fn test_generate_alias_default_length() {
        let alias = generate_alias(DEFAULT_ALIAS_LENGTH);
        assert_eq!(alias.len(), 6);
    }

    #[test]
    fn test_generate_alias_respects_length() {
        for length in [1, 4, 12, 32] {
            assert_eq!(generate_alias(length).len(), length);
        }
    }

    #[test]
    fn test_generate_alias_zero_length_is_empty() {
        assert!(generate_alias(0).is_empty());
    }

    #[test]
    fn test_generate_alias_uses_alphabet_only() {
        for _ in 0..200 {
            let alias = generate_alias(DEFAULT_ALIAS_LENGTH);
            assert!(alias.bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_generated_alias_passes_validation() {
        let alias = generate_alias(DEFAULT_ALIAS_LENGTH);
        assert!(validate_alias(&alias).is_ok());
    }

    #[test]
    fn test_validate_accepts_mixed_case_and_separators() {
        assert!(validate_alias("My-Link_2024").is_ok());
        assert!(validate_alias("x").is_ok());
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(validate_alias(""), Err(AliasValidationError::Empty));
    }

    #[test]
    fn test_validate_too_long() {
        let alias = "a".repeat(MAX_ALIAS_LENGTH + 1);
        assert_eq!(validate_alias(&alias), Err(AliasValidationError::TooLong));

        let alias = "a".repeat(MAX_ALIAS_LENGTH);
        assert!(validate_alias(&alias).is_ok());
    }

    #[test]
    fn test_validate_invalid_characters() {
        for alias in ["my link", "a/b", "caf\u{e9}", "q?x=1", "dot.ted"] {
            assert_eq!(
                validate_alias(alias),
                Err(AliasValidationError::InvalidCharacters),
                "alias '{}' should be rejected",
                alias
            );
        }
    }

    #[test]
    fn test_validate_all_reserved_aliases() {
        for &reserved in RESERVED_ALIASES {
            assert_eq!(
                validate_alias(reserved),
                Err(AliasValidationError::Reserved(reserved.to_string()))
            );
        }
    }
}
