//! Browser session key used to bind votes

use std::fmt;

/// Maximum stored length of a session key
pub const SESSION_KEY_MAX_LEN: usize = 64;

/// Opaque per-browser session token
///
/// The token is issued and expired by the HTTP layer; the domain only needs
/// it to be a short, non-empty, printable string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey(String);

impl SessionKey {
    /// Validate and wrap a raw token
    pub fn parse(raw: impl Into<String>) -> Result<Self, InvalidSessionKey> {
        let raw = raw.into();
        if raw.is_empty() || raw.len() > SESSION_KEY_MAX_LEN {
            return Err(InvalidSessionKey);
        }
        if !raw.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(InvalidSessionKey);
        }
        Ok(Self(raw))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Error for tokens that cannot be used as session keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid session key")]
pub struct InvalidSessionKey;
