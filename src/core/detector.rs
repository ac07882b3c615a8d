//! Secret change detection.
//!
//! Decides, from a candidate secret and the memo stored on the previous
//! pass, whether the secret changed and which memo to keep. Pure: nothing
//! is persisted here.

use tracing::debug;

use crate::core::domain::{Evaluation, Memo, SecretInput};
use crate::core::hasher::{Bcrypt, Hasher};
use crate::error::Result;

/// Compares candidate secrets against stored memos.
#[derive(Debug, Clone, Default)]
pub struct Detector<H = Bcrypt> {
    hasher: H,
}

impl Detector {
    /// A bcrypt detector at the given work factor.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCost` outside 4..=31.
    pub fn with_cost(cost: u32) -> Result<Self> {
        Ok(Self::new(Bcrypt::new(cost)?))
    }
}

impl<H: Hasher> Detector<H> {
    pub fn new(hasher: H) -> Self {
        Self { hasher }
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Evaluate a candidate secret against the stored memo.
    ///
    /// - A blank candidate never counts as a change; the stored memo is kept.
    /// - A candidate that verifies against a non-blank memo is unchanged.
    /// - Anything else is a change and gets a freshly salted memo. A memo the
    ///   hasher cannot parse falls into this case and is replaced.
    ///
    /// # Errors
    ///
    /// Returns `Error::HashComputation` when a new memo is needed and the
    /// hasher fails to produce one, or when the hasher cannot tell the
    /// candidate apart from other inputs (e.g. a secret past bcrypt's
    /// 72-byte limit). Such a candidate is never reported as unchanged.
    pub fn evaluate(&self, candidate: &SecretInput, stored: &Memo) -> Result<Evaluation> {
        if candidate.is_blank() {
            debug!("blank candidate, keeping stored memo");
            return Ok(Evaluation::unchanged(stored.clone()));
        }

        if !stored.is_blank() && self.hasher.verify(candidate, stored)? {
            debug!("candidate matches stored memo");
            return Ok(Evaluation::unchanged(stored.clone()));
        }

        let had_memo = !stored.is_blank();
        debug!(
            had_memo,
            recognized = stored.is_recognized(),
            "candidate differs from stored memo"
        );
        let memo = self.hasher.generate(candidate)?;
        Ok(Evaluation::changed(memo))
    }
}
