//! Implementation of the `plumbkit classify` command.
//!
//! Mirrors the host-editor integration: only R files are eligible, the base
//! name is the file stem, and the classification itself is the pure core
//! function over the file's content.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, instrument};

use plumbkit_core::domain::{FileRole, classify};

use crate::{
    cli::ClassifyArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct Classification<'a> {
    file: &'a Path,
    role: FileRole,
    extended_type: &'static str,
}

/// Execute the `plumbkit classify` command.
#[instrument(skip_all, fields(files = args.files.len()))]
pub fn execute(args: ClassifyArgs, output: OutputManager) -> CliResult<()> {
    let mut results = Vec::with_capacity(args.files.len());

    for file in &args.files {
        let role = classify_file(file)?;
        debug!(file = %file.display(), %role, "classified");
        results.push(Classification {
            file,
            role,
            extended_type: role.as_extended_type(),
        });
    }

    if output.is_json() {
        output.result(&serde_json::to_string_pretty(&results).expect("serializable"))?;
    } else {
        for c in &results {
            output.result(&format!("{}: {}", c.file.display(), c.role))?;
        }
    }

    Ok(())
}

/// Classify a single file from disk.
///
/// Non-R files never carry a plumber role, whatever their content.
fn classify_file(path: &Path) -> CliResult<FileRole> {
    if !is_r_file(path) {
        return Ok(FileRole::None);
    }

    let content = std::fs::read_to_string(path).map_err(|e| CliError::IoError {
        message: format!("failed to read '{}'", path.display()),
        source: e,
    })?;
    let base_name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    Ok(classify(base_name, &content))
}

fn is_r_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("r"))
}
