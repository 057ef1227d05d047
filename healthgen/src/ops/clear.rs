//! Clear operation - removal of output left by an earlier run.

use std::{fs, path::Path};

use eyre::{Context, Result};
use healthgen_codegen_csharp::files::EXTENSIONS_FILENAME;

use crate::reports::{GenerateReport, NotConfigured, NotConfiguredResult};

/// Execute the clear operation.
///
/// With no definition there must be no registrations, so a generated file
/// from a previous run is deleted. A dry run only reports it.
pub fn clear(reason: NotConfigured, output_dir: &Path, dry_run: bool) -> Result<GenerateReport> {
    let path = output_dir.join(EXTENSIONS_FILENAME);
    let stale = path.is_file().then_some(path);

    if let Some(stale) = stale.as_ref().filter(|_| !dry_run) {
        fs::remove_file(stale)
            .wrap_err_with(|| format!("Failed to remove {}", stale.display()))?;
        tracing::info!(file = %stale.display(), "removed stale health check registrations");
    }

    Ok(GenerateReport::not_configured(NotConfiguredResult {
        reason,
        stale,
        dry_run,
    }))
}
