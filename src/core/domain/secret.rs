//! Secret input type.
//!
//! The candidate value supplied for a secret field on one reconciliation
//! pass. It lives only for the duration of a single decision.

use zeroize::Zeroizing;

/// A user-supplied candidate secret.
///
/// The buffer is wiped on drop and never shown by `Debug`.
#[derive(Clone, Default)]
pub struct SecretInput(Zeroizing<String>);

impl SecretInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// A blank input, meaning "no value configured".
    pub fn blank() -> Self {
        Self::default()
    }

    /// Whether the value is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The plaintext value.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SecretInput {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SecretInput {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Debug for SecretInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SecretInput").field(&"<redacted>").finish()
    }
}
