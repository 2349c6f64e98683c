//! Target URL validation.
//!
//! Targets are stored exactly as submitted. This module only decides whether a
//! submitted string is acceptable as a redirect destination.

use url::Url;

/// Reasons a target URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,

    #[error("URL contains control characters")]
    ControlCharacters,
}

/// Checks that `input` is an absolute HTTP or HTTPS URL with a host.
///
/// Rejects `javascript:`, `data:`, `file:` and other schemes that should never
/// be served as a redirect.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`UrlValidationError::MissingHost`] when no host is present.
/// Returns [`UrlValidationError::ControlCharacters`] for tabs, newlines and other
/// control characters, which the parser would silently strip but which cannot be
/// sent back in a `Location` header.
pub fn validate_target(input: &str) -> Result<(), UrlValidationError> {
    if input.chars().any(char::is_control) {
        return Err(UrlValidationError::ControlCharacters);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_target("https://example.com/a").is_ok());
        assert!(validate_target("http://example.com:8080/path?q=1#frag").is_ok());
    }

    #[test]
    fn test_rejects_relative_url() {
        assert!(matches!(
            validate_target("example.com/a"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        for input in ["javascript:alert(1)", "data:text/html,hi", "file:///etc/passwd"] {
            assert_eq!(
                validate_target(input),
                Err(UrlValidationError::UnsupportedProtocol)
            );
        }
    }

    #[test]
    fn test_rejects_control_characters() {
        for input in [
            "https://example.com/a\nb",
            "https://example.com/a\tb",
            "https://example.com/\r\nSet-Cookie: x=1",
            "https://example.com/\u{7f}",
        ] {
            assert_eq!(
                validate_target(input),
                Err(UrlValidationError::ControlCharacters)
            );
        }
    }

    #[test]
    fn test_rejects_empty_string() {
        assert!(validate_target("").is_err());
    }
}
