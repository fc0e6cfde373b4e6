//! URL field checks.

use url::Url;

use crate::error::DomainError;

/// Checks that `value` parses as an absolute URL.
///
/// # Examples
///
/// ```
/// use eordb_domain::common::require_absolute_url;
///
/// assert!(require_absolute_url("graphic_url", "https://cdn.example.com/1.png").is_ok());
/// assert!(require_absolute_url("graphic_url", "/relative/1.png").is_err());
/// ```
pub fn require_absolute_url(field: &'static str, value: &str) -> Result<(), DomainError> {
    match Url::parse(value) {
        Ok(url) if url.has_host() => Ok(()),
        _ => Err(DomainError::invalid_url(field, value)),
    }
}
