//! Memo type.
//!
//! A memo is the salted one-way hash standing in for a secret in stored
//! state. It is either empty (no secret observed yet) or a hash string.

use serde::{Deserialize, Serialize};

use crate::core::constants::BCRYPT_PREFIXES;

/// The persisted one-way hash of a previously observed secret.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Memo(String);

impl Memo {
    /// Wrap a stored memo string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The uninitialized memo.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether the memo is blank after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Whether the memo carries a known bcrypt version prefix.
    ///
    /// Diagnostic only: an unrecognized memo simply never verifies.
    pub fn is_recognized(&self) -> bool {
        BCRYPT_PREFIXES.iter().any(|p| self.0.starts_with(p))
    }
}

impl From<String> for Memo {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Memo {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for Memo {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Memo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
