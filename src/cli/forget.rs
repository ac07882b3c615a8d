//! Forget command - drop stored memos.

use std::path::Path;

use crate::cli::output;
use crate::core::state::StateFile;
use crate::core::suppress::DiffSuppressor;
use crate::error::Result;

/// Remove one field's memo, or a whole resource's state when `field` is `None`.
pub fn execute(
    state_path: &Path,
    resource: &str,
    field: Option<&str>,
    suppressor: &DiffSuppressor,
) -> Result<()> {
    let mut state = StateFile::load(state_path)?;

    let removed = match field {
        Some(field) => {
            let removed = state
                .resources
                .get_mut(resource)
                .and_then(|bag| suppressor.forget(field, bag))
                .is_some();
            if removed {
                output::success(&format!("forgot {}", output::key(&suppressor.memo_key(field))));
            }
            removed
        }
        None => {
            let removed = state.destroy(resource).is_some();
            if removed {
                output::success(&format!("forgot resource {}", output::key(resource)));
            }
            removed
        }
    };

    if !removed {
        output::warn("nothing stored");
        return Ok(());
    }

    state.save(state_path)
}
