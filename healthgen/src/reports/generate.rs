//! Generate command report data structures.

use std::path::PathBuf;

use healthgen_codegen::PreviewFile;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// The definition that was generated from, when there was one.
    pub definition: Option<DefinitionSummary>,
    /// Warning messages from the lint pipeline.
    pub warnings: Vec<String>,
    /// What happened.
    pub result: GenerationResult,
}

/// Short description of the definition that was used.
#[derive(Debug)]
pub struct DefinitionSummary {
    pub source: PathBuf,
    pub name: String,
    pub dependency_count: usize,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
    /// Nothing to generate.
    NotConfigured(NotConfiguredResult),
}

/// Why no code was generated.
#[derive(Debug, PartialEq, Eq)]
pub enum NotConfigured {
    /// No candidate path ends with `health.yml`.
    NoDefinitionFile,
    /// The definition file holds no YAML content.
    BlankDefinition(PathBuf),
}

/// Result when nothing is configured.
#[derive(Debug)]
pub struct NotConfiguredResult {
    pub reason: NotConfigured,
    /// Output left behind by an earlier run.
    pub stale: Option<PathBuf>,
    /// Whether the stale output was kept because this is a dry run.
    pub dry_run: bool,
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files written.
    pub written: Vec<PathBuf>,
    /// Files left as they were.
    pub skipped: Vec<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl GenerateReport {
    pub fn not_configured(result: NotConfiguredResult) -> Self {
        Self {
            definition: None,
            warnings: Vec::new(),
            result: GenerationResult::NotConfigured(result),
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
            GenerationResult::NotConfigured(result) => Self::render_not_configured(out, result),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if let Some(definition) = &self.definition {
            out.preformatted(&format!(
                "{} ({} health check{})",
                definition.name,
                definition.dependency_count,
                if definition.dependency_count == 1 { "" } else { "s" }
            ));
            out.key_value("Definition", &definition.source.display().to_string());
            out.newline();
        }

        out.section(&format!("Generated in {}", written.output_dir.display()));
        for path in &written.written {
            out.added_item(&path.display().to_string());
        }
        for path in &written.skipped {
            out.list_item(&format!("{} (unchanged)", path.display()));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} file{} would be generated",
            preview.files.len(),
            if preview.files.len() == 1 { "" } else { "s" }
        ));
    }

    fn render_not_configured(out: &mut dyn Output, result: &NotConfiguredResult) {
        match &result.reason {
            NotConfigured::NoDefinitionFile => {
                out.preformatted("No health.yml found; nothing to generate")
            }
            NotConfigured::BlankDefinition(path) => out.preformatted(&format!(
                "{} is empty; nothing to generate",
                path.display()
            )),
        }

        if let Some(stale) = &result.stale {
            let verb = if result.dry_run { "would remove" } else { "removed" };
            out.list_item(&format!("{} {}", verb, stale.display()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::BufferOutput;

    #[test]
    fn test_not_configured() {
        let report = GenerateReport::not_configured(NotConfiguredResult {
            reason: NotConfigured::NoDefinitionFile,
            stale: None,
            dry_run: false,
        });
        assert_eq!(
            BufferOutput::render(&report),
            "No health.yml found; nothing to generate"
        );

        let report = GenerateReport::not_configured(NotConfiguredResult {
            reason: NotConfigured::BlankDefinition("health.yml".into()),
            stale: None,
            dry_run: false,
        });
        assert_eq!(
            BufferOutput::render(&report),
            "health.yml is empty; nothing to generate"
        );
    }

    #[test]
    fn test_not_configured_with_stale_output() {
        let report = GenerateReport::not_configured(NotConfiguredResult {
            reason: NotConfigured::NoDefinitionFile,
            stale: Some("out/HealthChecksGeneratorExtensions.g.cs".into()),
            dry_run: false,
        });
        assert_eq!(
            BufferOutput::render(&report),
            "No health.yml found; nothing to generate\n  \
             - removed out/HealthChecksGeneratorExtensions.g.cs"
        );

        let report = GenerateReport::not_configured(NotConfiguredResult {
            reason: NotConfigured::NoDefinitionFile,
            stale: Some("out/HealthChecksGeneratorExtensions.g.cs".into()),
            dry_run: true,
        });
        assert!(
            BufferOutput::render(&report)
                .ends_with("would remove out/HealthChecksGeneratorExtensions.g.cs")
        );
    }

    #[test]
    fn test_written() {
        let report = GenerateReport {
            definition: Some(DefinitionSummary {
                source: "health.yml".into(),
                name: "svc".to_string(),
                dependency_count: 1,
            }),
            warnings: vec!["dependency 'db' has no tags".to_string()],
            result: GenerationResult::Written(WrittenResult {
                output_dir: "out".into(),
                written: vec!["out/HealthChecksGeneratorExtensions.g.cs".into()],
                skipped: Vec::new(),
            }),
        };

        assert_eq!(
            BufferOutput::render(&report),
            "warning: dependency 'db' has no tags\n\
             svc (1 health check)\n\
             Definition: health.yml\n\
             \n\
             Generated in out:\n  \
             + out/HealthChecksGeneratorExtensions.g.cs"
        );
    }

    #[test]
    fn test_preview() {
        let report = GenerateReport {
            definition: None,
            warnings: Vec::new(),
            result: GenerationResult::Preview(PreviewResult {
                files: vec![PreviewFile {
                    path: "A.g.cs".to_string(),
                    content: "class A {}".to_string(),
                }],
            }),
        };

        assert_eq!(
            BufferOutput::render(&report),
            "── A.g.cs ──\nclass A {}\n── Summary ──\n1 file would be generated"
        );
    }
}
