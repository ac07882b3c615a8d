//! Hash command - print a fresh memo for a secret.

use crate::cli::SecretSource;
use crate::core::hasher::Hasher;
use crate::core::suppress::DiffSuppressor;
use crate::error::{Result, ValidationError};

/// Print a memo for the secret read from `source`.
pub fn execute(source: &SecretSource, suppressor: &DiffSuppressor) -> Result<()> {
    let secret = source.read()?;
    if secret.is_blank() {
        return Err(ValidationError::MissingSecret.into());
    }

    let memo = suppressor.detector().hasher().generate(&secret)?;
    println!("{}", memo);
    Ok(())
}
