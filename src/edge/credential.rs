//! The static secret the filter compares against.

use std::fmt;

use base64::Engine;

/// An opaque `authorization` header value, by convention
/// `"Basic " + base64(id:pass)`.
///
/// Comparison is exact byte equality. The comparison does not stop at the
/// first differing byte.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Build the `Basic` header value for a user id and password.
    pub fn basic(username: &str, password: &str) -> Self {
        let encoded = base64::engine::general_purpose::STANDARD
            .encode(format!("{username}:{password}"));
        Self(format!("Basic {encoded}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `presented` is byte-for-byte the configured value.
    pub fn matches(&self, presented: &str) -> bool {
        let expected = self.0.as_bytes();
        let presented = presented.as_bytes();
        if expected.len() != presented.len() {
            return false;
        }
        expected
            .iter()
            .zip(presented)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
