//! One-way hashing primitives.
//!
//! Memos are produced and checked through the `Hasher` trait so the change
//! detector can be driven by any salted generate/verify pair. The default
//! implementation is bcrypt at its minimum work factor.
//!
//! ## Adding a New Primitive
//!
//! 1. Implement the `Hasher` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Argon { /* ... */ }
//!
//! impl Hasher for Argon {
//!     fn generate(&self, secret: &SecretInput) -> Result<Memo> {
//!         // Salt and hash
//!     }
//!     fn verify(&self, secret: &SecretInput, memo: &Memo) -> Result<bool> {
//!         // Compare using the parameters embedded in the memo
//!     }
//! }
//! ```

use crate::core::domain::{Memo, SecretInput};
use crate::error::Result;

mod bcrypt;

pub use self::bcrypt::Bcrypt;

/// A salted one-way hash generator and its paired verifier.
pub trait Hasher {
    /// Hash `secret` with a fresh salt.
    ///
    /// # Errors
    ///
    /// Returns `Error::HashComputation` if the primitive cannot produce a hash.
    fn generate(&self, secret: &SecretInput) -> Result<Memo>;

    /// Check whether `secret` is the preimage of `memo`.
    ///
    /// Must use the primitive's own verification routine. A memo the
    /// primitive cannot parse is reported as a mismatch, not an error.
    ///
    /// # Errors
    ///
    /// Returns `Error::HashComputation` if `secret` is outside what the
    /// primitive can distinguish, e.g. longer than its input limit.
    fn verify(&self, secret: &SecretInput, memo: &Memo) -> Result<bool>;
}

impl<H: Hasher + ?Sized> Hasher for &H {
    fn generate(&self, secret: &SecretInput) -> Result<Memo> {
        (**self).generate(secret)
    }

    fn verify(&self, secret: &SecretInput, memo: &Memo) -> Result<bool> {
        (**self).verify(secret, memo)
    }
}

impl<H: Hasher + ?Sized> Hasher for Box<H> {
    fn generate(&self, secret: &SecretInput) -> Result<Memo> {
        (**self).generate(secret)
    }

    fn verify(&self, secret: &SecretInput, memo: &Memo) -> Result<bool> {
        (**self).verify(secret, memo)
    }
}
