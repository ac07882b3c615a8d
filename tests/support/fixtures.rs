//! Test fixtures and constants.

/// A secret field key used across tests.
pub const FIELD: &str = "personal_access_token";

/// The memo key derived from `FIELD` with the default suffix.
pub const FIELD_MEMO: &str = "personal_access_token_hash";

/// Original and rotated secret values.
pub const SECRET: &str = "abc123";
pub const ROTATED: &str = "xyz789";

/// A memo slot holding data not produced by bcrypt.
pub const GARBAGE_MEMO: &str = "legacy-plaintext-token";
