//! Settings management.
//!
//! Reads `tfsecrets.toml` from the current directory, falling back to the
//! user config directory, falling back to built-in defaults.
//!
//! ```toml
//! [memo]
//! cost = 4
//! suffix = "_hash"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants::{self, MAX_COST, MEMO_SUFFIX, MIN_COST};
use crate::core::validation;
use crate::error::{ConfigError, Result};

/// Loaded settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub memo: MemoSettings,
}

/// How memos are computed and stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoSettings {
    /// bcrypt work factor
    #[serde(default = "default_cost")]
    pub cost: u32,
    /// Suffix appended to a field key to name its memo attribute
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

fn default_cost() -> u32 {
    MIN_COST
}

fn default_suffix() -> String {
    MEMO_SUFFIX.to_string()
}

impl Default for MemoSettings {
    fn default() -> Self {
        Self {
            cost: default_cost(),
            suffix: default_suffix(),
        }
    }
}

impl Settings {
    /// Candidate settings files, highest priority first.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(constants::CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join(constants::USER_CONFIG_DIR).join("config.toml"));
        }
        paths
    }

    /// Load settings from the first existing search path, apply the
    /// `TFSECRETS_MEMO_COST` override, and validate.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a settings file is unreadable or malformed,
    /// or a value is out of range.
    pub fn load() -> Result<Self> {
        let mut settings = match Self::search_paths().into_iter().find(|p| p.exists()) {
            Some(path) => Self::read(&path)?,
            None => {
                debug!("no settings file, using defaults");
                Self::default()
            }
        };

        let cost = std::env::var(constants::COST_ENV).ok();
        settings.apply_overrides(cost.as_deref())?;
        settings.validate()?;

        Ok(settings)
    }

    /// Load and validate settings from a specific file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is unreadable, malformed or invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let settings = Self::read(path)?;
        settings.validate()?;
        Ok(settings)
    }

    fn read(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading settings");
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let settings: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        Ok(settings)
    }

    /// Apply an override for the work factor, as read from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the value is not a number.
    pub fn apply_overrides(&mut self, cost: Option<&str>) -> Result<()> {
        if let Some(raw) = cost {
            let parsed = raw.trim().parse::<u32>().map_err(|e| ConfigError::InvalidValue {
                field: "memo.cost",
                reason: format!("{} ({})", raw, e),
            })?;
            debug!(cost = parsed, "work factor overridden from environment");
            self.memo.cost = parsed;
        }
        Ok(())
    }

    /// Validate setting values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an out-of-range cost or a bad suffix.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_COST..=MAX_COST).contains(&self.memo.cost) {
            return Err(ConfigError::InvalidValue {
                field: "memo.cost",
                reason: format!("{} is outside {}..={}", self.memo.cost, MIN_COST, MAX_COST),
            }
            .into());
        }

        if let Err(e) = validation::validate_suffix(&self.memo.suffix) {
            return Err(ConfigError::InvalidValue {
                field: "memo.suffix",
                reason: e.to_string(),
            }
            .into());
        }

        Ok(())
    }
}
