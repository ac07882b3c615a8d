//! Constants used throughout tfsecrets.
//!
//! Centralizes magic strings and hashing parameters.

/// Suffix appended to a secret field's key to derive its memo key.
pub const MEMO_SUFFIX: &str = "_hash";

/// Lowest bcrypt work factor. Memos only detect change, so speed wins.
pub const MIN_COST: u32 = 4;

/// Highest bcrypt work factor.
pub const MAX_COST: u32 = 31;

/// Longest secret bcrypt hashes without truncation.
pub const MAX_SECRET_LEN: usize = 72;

/// Version prefixes of bcrypt hashes.
pub const BCRYPT_PREFIXES: &[&str] = &["$2a$", "$2b$", "$2y$"];

/// Settings file looked up in the current directory.
pub const CONFIG_FILE: &str = "tfsecrets.toml";

/// Settings file name under the user config directory.
pub const USER_CONFIG_DIR: &str = "tfsecrets";

/// Default persisted state file for the CLI.
pub const STATE_FILE: &str = ".tfsecrets-state.toml";

/// Environment variable overriding the memo work factor.
pub const COST_ENV: &str = "TFSECRETS_MEMO_COST";

/// Environment variable controlling log filtering.
pub const LOG_ENV: &str = "TFSECRETS_LOG";
