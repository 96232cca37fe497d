//! Shared API key credential.

use std::fmt;

use http::HeaderValue;
use http::header::InvalidHeaderValue;

/// The credential sent in the `Authorization` header of every webhook.
///
/// The value is passed through as-is; no auth scheme prefix is added.
/// It is marked sensitive and redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(HeaderValue);

impl ApiKey {
    /// Creates an API key from its textual form.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHeaderValue`] if the key contains characters that
    /// cannot appear in an HTTP header (control characters, newlines).
    pub fn new(key: &str) -> Result<Self, InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(key)?;
        value.set_sensitive(true);
        Ok(Self(value))
    }

    /// Returns true if the key is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the header value carrying this key.
    #[must_use]
    pub const fn header_value(&self) -> &HeaderValue {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_value_is_verbatim_and_sensitive() {
        let key = ApiKey::new("K1").unwrap();
        assert_eq!(key.header_value(), "K1");
        assert!(key.header_value().is_sensitive());
    }

    #[test]
    fn debug_redacts_key() {
        let key = ApiKey::new("super-secret").unwrap();
        let debug = format!("{key:?}");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn rejects_newline() {
        assert!(ApiKey::new("bad\nkey").is_err());
    }

    #[test]
    fn empty_key_is_empty() {
        assert!(ApiKey::new("").unwrap().is_empty());
        assert!(!ApiKey::new("x").unwrap().is_empty());
    }
}
