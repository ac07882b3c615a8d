//! Inspect command - list stored memos.

use std::path::Path;

use serde::Serialize;

use crate::cli::output;
use crate::core::state::StateFile;
use crate::error::{Result, StateError};

/// One stored memo, as reported by `inspect`.
#[derive(Debug, Serialize)]
struct MemoReport<'a> {
    resource: &'a str,
    field: &'a str,
    recognized: bool,
}

/// List memos in the state file.
pub fn execute(state_path: &Path, resource: Option<&str>, suffix: &str, json: bool) -> Result<()> {
    let state = StateFile::load(state_path)?;

    let reports: Vec<MemoReport<'_>> = state
        .resources
        .iter()
        .filter(|(address, _)| resource.map_or(true, |r| r == address.as_str()))
        .flat_map(move |(address, bag)| {
            bag.memos(suffix).map(move |(field, memo)| MemoReport {
                resource: address.as_str(),
                field,
                recognized: memo.is_recognized(),
            })
        })
        .collect();

    if json {
        let rendered = serde_json::to_string_pretty(&reports).map_err(StateError::Json)?;
        println!("{}", rendered);
        return Ok(());
    }

    if reports.is_empty() {
        output::dimmed("no memos stored");
        return Ok(());
    }

    let mut current = None;
    for report in &reports {
        if current != Some(report.resource) {
            output::section(report.resource);
            current = Some(report.resource);
        }
        let status = if report.recognized {
            "bcrypt"
        } else {
            "unrecognized (will be replaced)"
        };
        output::kv(&output::key(report.field), status);
    }

    Ok(())
}
