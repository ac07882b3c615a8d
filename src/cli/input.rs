//! Secret input handling.
//!
//! Reads secret values from an environment variable or stdin into
//! zeroizing buffers.

use std::io::Read;

use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::SecretSource;
use crate::core::domain::SecretInput;
use crate::error::Result;

impl SecretSource {
    /// Read the secret. An unset variable or empty stdin yields a blank input.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if stdin cannot be read.
    pub fn read(&self) -> Result<SecretInput> {
        if let Some(var) = &self.value_env {
            debug!(var = %var, "reading secret from environment");
            return Ok(std::env::var(var).map(SecretInput::from).unwrap_or_default());
        }

        debug!("reading secret from stdin");
        let mut buf = Zeroizing::new(String::new());
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(SecretInput::new(strip_newline(&buf)))
    }
}

/// Drop a single trailing newline, as left by `echo` or a heredoc.
pub fn strip_newline(raw: &str) -> &str {
    raw.strip_suffix("\r\n")
        .or_else(|| raw.strip_suffix('\n'))
        .unwrap_or(raw)
}
