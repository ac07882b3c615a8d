//! tfsecrets - hash-based change detection for secret resource fields.
//!
//! Infrastructure providers must decide on every plan whether a sensitive
//! attribute changed, without keeping the secret itself in state. tfsecrets
//! stores a salted bcrypt memo next to each secret field and compares new
//! values against it.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── check         # Run diff suppression against a state file
//! │   ├── hash / verify # Memo utilities
//! │   ├── inspect       # List stored memos
//! │   ├── forget        # Drop memos or resource state
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── detector      # Pure change detection
//!     ├── suppress      # Diff-suppression adapter over resource state
//!     ├── hasher/       # Hashing primitives
//!     │   ├── mod       # Hasher trait
//!     │   └── bcrypt    # bcrypt implementation
//!     ├── state/        # Resource state access
//!     │   ├── bag       # In-memory attribute bag
//!     │   └── file      # TOML state file
//!     ├── schema        # Protected secret fields
//!     ├── plan          # Batch evaluation of secret sets
//!     └── config        # tfsecrets.toml settings
//! ```
//!
//! # Example
//!
//! ```
//! use tfsecrets::core::domain::SecretInput;
//! use tfsecrets::core::state::{AttributeBag, ResourceState};
//! use tfsecrets::core::suppress::DiffSuppressor;
//!
//! let suppressor = DiffSuppressor::default();
//! let mut state = AttributeBag::new();
//! let token = SecretInput::new("abc123");
//!
//! // First sighting: a real change, memo stored under `token_hash`.
//! assert!(!suppressor.should_suppress_diff("token", &token, &mut state).unwrap());
//! assert!(state.get("token_hash").is_some());
//!
//! // Same value again: suppressed.
//! assert!(suppressor.should_suppress_diff("token", &token, &mut state).unwrap());
//! ```

pub mod cli;
pub mod core;
pub mod error;
