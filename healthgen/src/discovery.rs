//! Finding the definition file among the candidate inputs.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use healthgen_definition::locate_definition;

/// Candidate input files.
///
/// Explicit `files` are used as given. Without them, every regular file
/// directly inside `dir` is a candidate, sorted by path so the choice is
/// stable across platforms.
pub fn candidates(files: &[PathBuf], dir: &Path) -> Result<Vec<PathBuf>> {
    if !files.is_empty() {
        return Ok(files.to_vec());
    }

    let entries = std::fs::read_dir(dir)
        .wrap_err_with(|| format!("failed to read directory '{}'", dir.display()))?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.wrap_err_with(|| format!("failed to read '{}'", dir.display()))?;
        let file_type = entry
            .file_type()
            .wrap_err_with(|| format!("failed to inspect '{}'", entry.path().display()))?;
        if file_type.is_file() {
            found.push(entry.path());
        }
    }
    found.sort();
    Ok(found)
}

/// The definition file to use, if any candidate is one.
pub fn find_definition(files: &[PathBuf], dir: &Path) -> Result<Option<PathBuf>> {
    let candidates = candidates(files, dir)?;
    let found = locate_definition(&candidates);
    tracing::debug!(
        candidates = candidates.len(),
        found = ?found,
        "searched for health definition"
    );
    Ok(found)
}
