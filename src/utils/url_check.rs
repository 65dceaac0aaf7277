//! Target URL validation.
//!
//! URLs are stored exactly as submitted; this module only decides whether a
//! submitted URL is acceptable as a redirect target.

use url::Url;

/// Reasons a target URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlCheckError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL must not contain control characters")]
    ControlCharacter,
}

/// Checks that `input` is an absolute HTTP(S) URL with a host.
///
/// Rejects schemes such as `javascript:`, `data:` and `file:` so a short link
/// can never redirect somewhere a browser would execute or read locally.
///
/// Control characters are rejected before parsing: the parser drops tabs and
/// newlines silently, but the stored string must be usable verbatim as a
/// `Location` header.
///
/// # Errors
///
/// See [`UrlCheckError`].
pub fn validate_target_url(input: &str) -> Result<(), UrlCheckError> {
    if input.chars().any(char::is_control) {
        return Err(UrlCheckError::ControlCharacter);
    }

    let url = Url::parse(input).map_err(|e| UrlCheckError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlCheckError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlCheckError::MissingHost);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_target_url("https://example.com").is_ok());
        assert!(validate_target_url("http://example.com/path?q=1#frag").is_ok());
    }

    #[test]
    fn test_rejects_relative_url() {
        assert!(matches!(
            validate_target_url("not-a-url"),
            Err(UrlCheckError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        assert_eq!(
            validate_target_url("javascript:alert(1)"),
            Err(UrlCheckError::UnsupportedProtocol)
        );
        assert_eq!(
            validate_target_url("file:///etc/passwd"),
            Err(UrlCheckError::UnsupportedProtocol)
        );
        assert_eq!(
            validate_target_url("ftp://example.com/file"),
            Err(UrlCheckError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_rejects_control_characters() {
        assert_eq!(
            validate_target_url("https://exa\nmple.com/"),
            Err(UrlCheckError::ControlCharacter)
        );
        assert_eq!(
            validate_target_url("https://example.com/\tpath"),
            Err(UrlCheckError::ControlCharacter)
        );
        assert_eq!(
            validate_target_url("https://example.com/\r\nSet-Cookie: x=1"),
            Err(UrlCheckError::ControlCharacter)
        );
    }

    #[test]
    fn test_accepted_urls_are_valid_header_values() {
        for url in ["https://example.com/a?b=c", "https://example.com/a%20b#top"] {
            assert!(validate_target_url(url).is_ok());
            assert!(axum::http::HeaderValue::from_str(url).is_ok());
        }
    }
}
