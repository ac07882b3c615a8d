//! Persisted state file.
//!
//! Stores the attribute bags of several resources in one TOML document,
//! keyed by resource address:
//!
//! ```toml
//! [tfsecrets]
//! version = "0.1.0"
//!
//! [resources."azuredevops_serviceendpoint_github.main"]
//! project_id = "b1c3..."
//! personal_access_token_hash = "$2b$04$..."
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AttributeBag;
use crate::error::{Result, StateError};

/// All resources' stored attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateFile {
    pub tfsecrets: Meta,
    #[serde(default)]
    pub resources: BTreeMap<String, AttributeBag>,
}

/// Metadata section of the state file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Version of tfsecrets that last wrote the file.
    pub version: String,
}

impl StateFile {
    /// Create an empty state stamped with the current version.
    pub fn new() -> Self {
        Self {
            tfsecrets: Meta {
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            resources: BTreeMap::new(),
        }
    }

    /// Load state from `path`.
    ///
    /// # Errors
    ///
    /// Returns `StateError::NotFound` if the file doesn't exist,
    /// or `StateError::Parse` if the TOML is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading state");

        if !path.exists() {
            return Err(StateError::NotFound(path.to_path_buf()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(StateError::ReadFile)?;
        let state: Self = toml::from_str(&contents).map_err(StateError::Parse)?;

        debug!(resources = state.resources.len(), "state loaded");
        Ok(state)
    }

    /// Load state from `path`, or start empty if the file doesn't exist yet.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_or_new(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no state yet, starting empty");
            Ok(Self::new())
        }
    }

    /// Write state to `path`, stamping the current version.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the file write fails.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving state");

        self.tfsecrets.version = env!("CARGO_PKG_VERSION").to_string();
        let contents = toml::to_string_pretty(self).map_err(StateError::Serialize)?;
        std::fs::write(path, contents).map_err(StateError::WriteFile)?;

        Ok(())
    }

    /// A resource's attributes, if it has any stored state.
    pub fn resource(&self, address: &str) -> Option<&AttributeBag> {
        self.resources.get(address)
    }

    /// A resource's attributes, created empty on first use.
    pub fn resource_mut(&mut self, address: &str) -> &mut AttributeBag {
        self.resources.entry(address.to_string()).or_default()
    }

    /// Drop a resource's state, memos included.
    pub fn destroy(&mut self, address: &str) -> Option<AttributeBag> {
        self.resources.remove(address)
    }

    /// Render the state as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns `StateError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(StateError::Json)?)
    }
}

impl Default for StateFile {
    fn default() -> Self {
        Self::new()
    }
}
