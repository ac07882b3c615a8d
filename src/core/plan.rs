//! Batch evaluation of secret fields.
//!
//! Resources such as variable groups carry many secret values at once. A
//! [`Plan`] evaluates all of them against the stored memos and reports which
//! ones need a remote update. Memos are only written once every field has
//! been evaluated, so a hashing failure leaves state untouched.

use std::collections::BTreeMap;

use tracing::debug;

use crate::core::domain::{Memo, SecretInput};
use crate::core::hasher::Hasher;
use crate::core::state::ResourceState;
use crate::core::suppress::DiffSuppressor;
use crate::core::types::{FieldKey, MemoKey};
use crate::error::Result;

/// What a plan decided for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Candidate matches the stored memo.
    Unchanged,
    /// Candidate differs from the stored memo, or no memo existed.
    Changed,
    /// Candidate was blank; the remote value is left alone.
    Unset,
}

/// One field's outcome.
#[derive(Debug, Clone)]
pub struct PlanEntry {
    field: FieldKey,
    status: FieldStatus,
}

impl PlanEntry {
    pub fn new(field: FieldKey, status: FieldStatus) -> Self {
        Self { field, status }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn status(&self) -> FieldStatus {
        self.status
    }

    /// Whether this field needs a remote update.
    pub fn is_changed(&self) -> bool {
        matches!(self.status, FieldStatus::Changed)
    }
}

/// Outcome of evaluating a set of secret fields.
#[derive(Debug)]
pub struct Plan {
    entries: Vec<PlanEntry>,
}

impl Plan {
    /// Evaluate every candidate and persist the resulting memos.
    ///
    /// Candidates are keyed by field; a repeated field keeps its last value.
    /// Entries come back sorted by field key.
    ///
    /// # Errors
    ///
    /// Returns the first `Error::HashComputation`; no memo is written then.
    pub fn compute<H, S, I, K>(suppressor: &DiffSuppressor<H>, candidates: I, state: &mut S) -> Result<Self>
    where
        H: Hasher,
        S: ResourceState + ?Sized,
        I: IntoIterator<Item = (K, SecretInput)>,
        K: Into<FieldKey>,
    {
        let candidates: BTreeMap<FieldKey, SecretInput> = candidates
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect();

        let mut entries = Vec::with_capacity(candidates.len());
        let mut writes: Vec<(MemoKey, Memo)> = Vec::new();

        for (field, candidate) in candidates {
            let (evaluation, pending) = suppressor.assess_field(&field, &candidate, &*state)?;

            let status = if candidate.is_blank() {
                FieldStatus::Unset
            } else if evaluation.is_changed() {
                FieldStatus::Changed
            } else {
                FieldStatus::Unchanged
            };

            if let Some(key) = pending {
                writes.push((key, evaluation.into_memo()));
            }
            entries.push(PlanEntry::new(field, status));
        }

        for (key, memo) in writes {
            state.set(&key, memo.into_string());
        }

        let plan = Self { entries };
        debug!(
            fields = plan.len(),
            changed = plan.changed().len(),
            "secret plan computed"
        );
        Ok(plan)
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    /// Fields needing a remote update.
    pub fn changed(&self) -> Vec<&PlanEntry> {
        self.filter(FieldStatus::Changed)
    }

    pub fn unchanged(&self) -> Vec<&PlanEntry> {
        self.filter(FieldStatus::Unchanged)
    }

    pub fn unset(&self) -> Vec<&PlanEntry> {
        self.filter(FieldStatus::Unset)
    }

    /// Whether any field needs a remote update.
    pub fn requires_update(&self) -> bool {
        self.entries.iter().any(|e| e.is_changed())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn filter(&self, status: FieldStatus) -> Vec<&PlanEntry> {
        self.entries.iter().filter(|e| e.status == status).collect()
    }
}

/// Field key of a named member of a secret set, e.g. `variables_secret.DB_PASSWORD`.
pub fn member_key(set: &str, name: &str) -> FieldKey {
    format!("{}.{}", set, name)
}
