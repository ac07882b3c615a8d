//! Verify command - check a secret against a memo.

use crate::cli::{output, SecretSource};
use crate::core::domain::Memo;
use crate::core::hasher::Hasher;
use crate::core::suppress::DiffSuppressor;
use crate::error::{Error, Result, ValidationError};

/// Verify the secret read from `source` against `memo`.
///
/// # Errors
///
/// Returns `Error::MemoMismatch` when the secret is not the memo's preimage,
/// or `Error::HashComputation` when the secret is too long to verify.
pub fn execute(memo: &str, source: &SecretSource, suppressor: &DiffSuppressor) -> Result<()> {
    let secret = source.read()?;
    if secret.is_blank() {
        return Err(ValidationError::MissingSecret.into());
    }

    let memo = Memo::new(memo);
    if !memo.is_recognized() {
        output::warn("memo has no known bcrypt prefix");
    }

    if suppressor.detector().hasher().verify(&secret, &memo)? {
        output::success("secret matches memo");
        Ok(())
    } else {
        Err(Error::MemoMismatch)
    }
}
