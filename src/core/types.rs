//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// The name of a secret attribute on a resource (e.g. `personal_access_token`).
pub type FieldKey = String;

/// The derived attribute name a memo is stored under (e.g. `personal_access_token_hash`).
pub type MemoKey = String;

/// A flat attribute name in a resource's stored state.
pub type AttributeKey = String;
