//! Check command.
//!
//! Runs diff suppression for one secret field against the state file and
//! saves the updated memo.

use std::path::Path;

use crate::cli::{output, SecretSource};
use crate::core::state::StateFile;
use crate::core::suppress::DiffSuppressor;
use crate::core::validation;
use crate::error::Result;

/// Check whether a secret field changed.
pub fn execute(
    state_path: &Path,
    resource: &str,
    field: &str,
    source: &SecretSource,
    suppressor: &DiffSuppressor,
) -> Result<()> {
    validation::validate_field_key(field)?;
    let candidate = source.read()?;

    let mut state = StateFile::load_or_new(state_path)?;
    let suppress = suppressor.should_suppress_diff(field, &candidate, state.resource_mut(resource))?;
    state.save(state_path)?;

    if suppress {
        output::success(&format!("{} suppressed (no change)", output::key(field)));
    } else {
        output::warn(&format!("{} changed (update required)", output::key(field)));
    }

    Ok(())
}
