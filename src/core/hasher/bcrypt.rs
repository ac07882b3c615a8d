//! bcrypt-backed memo hashing.

use tracing::trace;

use super::Hasher;
use crate::core::constants::{MAX_COST, MAX_SECRET_LEN, MIN_COST};
use crate::core::domain::{Memo, SecretInput};
use crate::error::{HashError, Result, ValidationError};

/// bcrypt hasher with a fixed work factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bcrypt {
    cost: u32,
}

impl Bcrypt {
    /// Create a hasher with the given work factor.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCost` outside bcrypt's 4..=31.
    pub fn new(cost: u32) -> Result<Self> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(ValidationError::InvalidCost(cost).into());
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

/// bcrypt only reads the first 72 bytes, so longer inputs would collide.
fn check_len(secret: &SecretInput) -> Result<()> {
    if secret.len() > MAX_SECRET_LEN {
        return Err(HashError::TooLong {
            len: secret.len(),
            max: MAX_SECRET_LEN,
        }
        .into());
    }
    Ok(())
}

impl Default for Bcrypt {
    fn default() -> Self {
        Self { cost: MIN_COST }
    }
}

impl Hasher for Bcrypt {
    fn generate(&self, secret: &SecretInput) -> Result<Memo> {
        check_len(secret)?;
        let hash = ::bcrypt::hash(secret.expose(), self.cost).map_err(HashError::from)?;
        Ok(Memo::new(hash))
    }

    fn verify(&self, secret: &SecretInput, memo: &Memo) -> Result<bool> {
        check_len(secret)?;
        match ::bcrypt::verify(secret.expose(), memo.as_str()) {
            Ok(matched) => Ok(matched),
            Err(e) => {
                trace!(error = %e, "stored memo did not parse");
                Ok(false)
            }
        }
    }
}
