//! Diff suppression for secret fields.
//!
//! The reconciliation framework asks, per field, whether an apparent change
//! needs a remote update. For secret fields the answer comes from the
//! [`Detector`], and the memo it returns is written back to the resource's
//! state under `<field_key><suffix>`.

use tracing::debug;

use crate::core::config::Settings;
use crate::core::constants::MEMO_SUFFIX;
use crate::core::detector::Detector;
use crate::core::domain::{Evaluation, Memo, SecretInput};
use crate::core::hasher::{Bcrypt, Hasher};
use crate::core::state::{memo_key, ResourceState};
use crate::core::types::MemoKey;
use crate::error::Result;

/// Bridges change detection to a resource's stored state.
///
/// Callers must not run two passes over the same resource state at once.
#[derive(Debug, Clone)]
pub struct DiffSuppressor<H = Bcrypt> {
    detector: Detector<H>,
    suffix: String,
}

impl Default for DiffSuppressor {
    fn default() -> Self {
        Self::new(Detector::default())
    }
}

impl DiffSuppressor {
    /// Build a bcrypt suppressor from loaded settings.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCost` if the configured cost is out of range.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(Detector::with_cost(settings.memo.cost)?).with_suffix(&settings.memo.suffix))
    }
}

impl<H: Hasher> DiffSuppressor<H> {
    /// Suppressor storing memos under the default `_hash` suffix.
    pub fn new(detector: Detector<H>) -> Self {
        Self {
            detector,
            suffix: MEMO_SUFFIX.to_string(),
        }
    }

    /// Store memos under a different suffix.
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = suffix.to_string();
        self
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn detector(&self) -> &Detector<H> {
        &self.detector
    }

    /// The attribute a field's memo lives under.
    pub fn memo_key(&self, field_key: &str) -> MemoKey {
        memo_key(field_key, &self.suffix)
    }

    /// The memo currently stored for a field, empty if none.
    pub fn stored_memo<S: ResourceState + ?Sized>(&self, field_key: &str, state: &S) -> Memo {
        state
            .get(&self.memo_key(field_key))
            .map(Memo::new)
            .unwrap_or_default()
    }

    /// Decide whether a field's apparent diff should be suppressed.
    ///
    /// Returns `true` when the secret is unchanged (or blank), meaning no
    /// remote update is needed for this field. Whenever the resulting memo
    /// differs from what `state` holds, it is written back, suppressed or not.
    ///
    /// # Errors
    ///
    /// Returns `Error::HashComputation` if a new memo could not be computed.
    /// State is left untouched in that case.
    pub fn should_suppress_diff<S: ResourceState + ?Sized>(
        &self,
        field_key: &str,
        candidate: &SecretInput,
        state: &mut S,
    ) -> Result<bool> {
        let evaluation = self.evaluate_field(field_key, candidate, state)?;
        Ok(!evaluation.is_changed())
    }

    /// Like [`should_suppress_diff`](Self::should_suppress_diff), returning
    /// the full evaluation.
    ///
    /// # Errors
    ///
    /// Returns `Error::HashComputation` if a new memo could not be computed.
    pub fn evaluate_field<S: ResourceState + ?Sized>(
        &self,
        field_key: &str,
        candidate: &SecretInput,
        state: &mut S,
    ) -> Result<Evaluation> {
        let (evaluation, pending) = self.assess_field(field_key, candidate, &*state)?;

        if let Some(key) = pending {
            debug!(field = field_key, memo_key = %key, "storing memo");
            state.set(&key, evaluation.next_memo().as_str().to_string());
        }

        debug!(
            field = field_key,
            changed = evaluation.is_changed(),
            "evaluated secret field"
        );
        Ok(evaluation)
    }

    /// Evaluate a field without writing anything.
    ///
    /// Alongside the evaluation, returns the memo key to write when the next
    /// memo differs from what `state` holds, or `None` when state is current.
    ///
    /// # Errors
    ///
    /// Returns `Error::HashComputation` if a new memo could not be computed.
    pub fn assess_field<S: ResourceState + ?Sized>(
        &self,
        field_key: &str,
        candidate: &SecretInput,
        state: &S,
    ) -> Result<(Evaluation, Option<MemoKey>)> {
        let stored = self.stored_memo(field_key, state);
        let evaluation = self.detector.evaluate(candidate, &stored)?;

        let pending = (evaluation.next_memo() != &stored).then(|| self.memo_key(field_key));
        Ok((evaluation, pending))
    }

    /// Remove a field's memo from state.
    pub fn forget<S: ResourceState + ?Sized>(&self, field_key: &str, state: &mut S) -> Option<Memo> {
        state.remove(&self.memo_key(field_key)).map(Memo::new)
    }
}
