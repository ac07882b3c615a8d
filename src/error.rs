//! Error types.
//!
//! Each concern owns a small error enum; all of them convert into the
//! top-level [`Error`] so callers can use `?` throughout.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for tfsecrets operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The hashing primitive failed to produce a memo.
    #[error("hash computation failed: {0}")]
    HashComputation(#[from] HashError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("secret does not match memo")]
    MemoMismatch,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of the one-way hashing primitive.
#[derive(Error, Debug)]
pub enum HashError {
    #[error("{0}")]
    Primitive(#[from] bcrypt::BcryptError),

    #[error("secret is {len} bytes, the hash accepts at most {max}")]
    TooLong { len: usize, max: usize },
}

/// Errors reading or writing persisted resource state.
#[derive(Error, Debug)]
pub enum StateError {
    #[error("state file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read state file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to write state file: {0}")]
    WriteFile(#[source] std::io::Error),

    #[error("failed to parse state file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize state: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to render state as json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Errors validating user-supplied names and parameters.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("field key cannot be empty")]
    EmptyKey,

    #[error("invalid field key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("work factor {0} is outside the supported range 4..=31")]
    InvalidCost(u32),

    #[error("no secret value supplied")]
    MissingSecret,
}

pub type Result<T> = std::result::Result<T, Error>;
