//! Resource state access.
//!
//! The reconciliation framework keeps each resource's attributes in a flat
//! key-value bag. The change detector's memos live in that same bag under a
//! derived key, so they share the resource's lifetime.
//!
//! # Concurrency
//!
//! Nothing here locks. Callers must guarantee that at most one
//! reconciliation pass touches a given resource's state at a time.

mod bag;
mod file;

pub use bag::AttributeBag;
pub use file::StateFile;

use crate::core::types::MemoKey;

/// Key-value access to one resource instance's stored attributes.
pub trait ResourceState {
    /// Read an attribute. `None` when absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write an attribute, replacing any previous value.
    fn set(&mut self, key: &str, value: String);

    /// Remove an attribute, returning its previous value.
    fn remove(&mut self, key: &str) -> Option<String>;
}

impl<S: ResourceState + ?Sized> ResourceState for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        (**self).remove(key)
    }
}

/// Derive the attribute a field's memo is stored under.
///
/// # Example
///
/// ```
/// use tfsecrets::core::state::memo_key;
///
/// assert_eq!(memo_key("token", "_hash"), "token_hash");
/// ```
pub fn memo_key(field_key: &str, suffix: &str) -> MemoKey {
    format!("{}{}", field_key, suffix)
}
