//! Check operation - definition validation.

use std::path::Path;

use eyre::{Context, Result};
use healthgen_codegen::pipeline::Pipeline;
use healthgen_definition::Definition;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the lint pipeline over the definition and returns its diagnostics.
/// A blank file (`None`) is valid and has nothing to lint.
pub fn check(definition: Option<&Definition>, config_path: &Path) -> Result<CheckReport> {
    let Some(definition) = definition else {
        return Ok(CheckReport {
            config_path: config_path.to_path_buf(),
            name: None,
            dependency_count: 0,
            diagnostics: Vec::new(),
        });
    };

    let ctx = Pipeline::new()
        .run(definition.clone())
        .wrap_err("Validation failed")?;

    tracing::info!(
        file = %config_path.display(),
        warnings = ctx.warning_count(),
        "checked health definition"
    );

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        name: Some(ctx.definition.name().to_string()),
        dependency_count: ctx.definition.len(),
        diagnostics: ctx.diagnostics,
    })
}
