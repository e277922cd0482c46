//! URL normalization utilities.
//!
//! Canonicalizes raw user input into an absolute URL with a lowercase host
//! before it is stored.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL has no host")]
    MissingHost,
}

/// Normalizes a raw URL string to a canonical absolute form.
///
/// # Normalization Rules
///
/// 1. Surrounding whitespace is trimmed; empty input is rejected
/// 2. Input without an `http://` or `https://` prefix (checked
///    case-insensitively) is assumed to be `https://`
/// 3. The result must parse as a URL with a non-empty host
/// 4. Scheme and host are lowercased; path, query, and userinfo are preserved
/// 5. A bare authority serializes without a trailing slash
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] for blank input,
/// [`UrlNormalizationError::InvalidFormat`] for unparseable input, and
/// [`UrlNormalizationError::MissingHost`] when no host component is present.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("  example.com  ").unwrap(), "https://example.com");
/// assert_eq!(normalize_url("HTTP://EXAMPLE.COM/X").unwrap(), "http://example.com/X");
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let lowered = trimmed.to_ascii_lowercase();
    let candidate = if lowered.starts_with("http://") || lowered.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    // Url::parse lowercases scheme and host and strips default ports.
    let url =
        Url::parse(&candidate).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::MissingHost);
    }

    let mut normalized = url.to_string();

    // Url serializes an empty path as "/"; keep a bare authority bare.
    if url.path() == "/" && url.query().is_none() && url.fragment().is_none() {
        normalized.truncate(normalized.len() - 1);
    }

    Ok(normalized)
}
