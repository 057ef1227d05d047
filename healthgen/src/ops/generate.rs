//! Generate operation - C# emission from a definition.

use std::path::Path;

use eyre::{Context, Result};
use healthgen_codegen::{LanguageCodegen, pipeline::Pipeline};
use healthgen_codegen_csharp::Generator;
use healthgen_definition::Definition;

use crate::reports::{
    DefinitionSummary, GenerateReport, GenerationResult, PreviewResult, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated code.
    pub output_dir: &'a Path,
    /// Namespace override for the extension class.
    pub namespace: Option<&'a str>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Lints the definition, then renders the extension class and writes or
/// previews it.
pub fn generate(
    definition: &Definition,
    source: &Path,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let ctx = Pipeline::new()
        .run(definition.clone())
        .wrap_err("Validation failed")?;

    let warnings: Vec<String> = ctx
        .warnings()
        .map(|d| match &d.location {
            Some(loc) => format!("{} (at {})", d.message, loc),
            None => d.message.clone(),
        })
        .collect();

    let mut generator = Generator::new(definition);
    if let Some(namespace) = opts.namespace {
        generator = generator.with_namespace(namespace)?;
    }

    let result = if opts.dry_run {
        let files = generator.preview()?;
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let generated = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;
        tracing::info!(
            files = generated.written.len(),
            dir = %opts.output_dir.display(),
            "wrote health check registrations"
        );
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: generated.written,
            skipped: generated.skipped,
        })
    };

    Ok(GenerateReport {
        definition: Some(DefinitionSummary {
            source: source.to_path_buf(),
            name: definition.name().to_string(),
            dependency_count: definition.len(),
        }),
        warnings,
        result,
    })
}
