//! Protected secret fields.
//!
//! A protected field is a sensitive resource attribute whose plaintext never
//! reaches stored state. It carries a companion memo attribute, may fall back
//! to an environment variable when unconfigured, and routes its diff
//! decisions through a [`DiffSuppressor`].

use tracing::debug;

use crate::core::domain::{Evaluation, Memo, SecretInput};
use crate::core::hasher::Hasher;
use crate::core::state::ResourceState;
use crate::core::suppress::DiffSuppressor;
use crate::core::types::{FieldKey, MemoKey};
use crate::core::validation;
use crate::error::Result;

/// A sensitive attribute guarded by a memo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedField {
    key: FieldKey,
    env_var: Option<String>,
    description: Option<String>,
}

impl ProtectedField {
    /// Declare a protected field.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `key` is not a valid field key.
    pub fn new(key: &str) -> Result<Self> {
        validation::validate_field_key(key)?;
        Ok(Self {
            key: key.to_string(),
            env_var: None,
            description: None,
        })
    }

    /// Read the value from `var` when the configuration leaves it unset.
    pub fn with_env_default(mut self, var: &str) -> Self {
        self.env_var = Some(var.to_string());
        self
    }

    pub fn with_description(mut self, text: &str) -> Self {
        self.description = Some(text.to_string());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn env_var(&self) -> Option<&str> {
        self.env_var.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The companion attribute `suppressor` stores this field's memo under.
    pub fn memo_key<H: Hasher>(&self, suppressor: &DiffSuppressor<H>) -> MemoKey {
        suppressor.memo_key(&self.key)
    }

    /// The candidate for this pass: the configured value, else the
    /// environment default, else blank.
    pub fn resolve(&self, configured: Option<&str>) -> SecretInput {
        self.resolve_with(configured, |var| std::env::var(var).ok())
    }

    /// [`resolve`](Self::resolve) with a custom environment lookup.
    pub fn resolve_with<F>(&self, configured: Option<&str>, lookup: F) -> SecretInput
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = configured {
            return SecretInput::new(value);
        }
        self.env_var
            .as_deref()
            .and_then(lookup)
            .map(SecretInput::from)
            .unwrap_or_default()
    }

    /// Decide whether this field's apparent diff should be suppressed.
    ///
    /// # Errors
    ///
    /// Returns `Error::HashComputation` if a new memo could not be computed.
    pub fn suppress_diff<H, S>(
        &self,
        suppressor: &DiffSuppressor<H>,
        candidate: &SecretInput,
        state: &mut S,
    ) -> Result<bool>
    where
        H: Hasher,
        S: ResourceState + ?Sized,
    {
        suppressor.should_suppress_diff(&self.key, candidate, state)
    }

    /// Record the value sent to the remote side after a create or update.
    ///
    /// Stores the memo and drops any plaintext copy of the field from state.
    ///
    /// # Errors
    ///
    /// Returns `Error::HashComputation` if a new memo could not be computed.
    pub fn record<H, S>(
        &self,
        suppressor: &DiffSuppressor<H>,
        value: &SecretInput,
        state: &mut S,
    ) -> Result<Evaluation>
    where
        H: Hasher,
        S: ResourceState + ?Sized,
    {
        let evaluation = suppressor.evaluate_field(&self.key, value, state)?;
        if state.remove(&self.key).is_some() {
            debug!(field = %self.key, "dropped plaintext from state");
        }
        Ok(evaluation)
    }

    /// Remove this field's memo, as when the owning resource is destroyed.
    pub fn forget<H, S>(&self, suppressor: &DiffSuppressor<H>, state: &mut S) -> Option<Memo>
    where
        H: Hasher,
        S: ResourceState + ?Sized,
    {
        suppressor.forget(&self.key, state)
    }
}
