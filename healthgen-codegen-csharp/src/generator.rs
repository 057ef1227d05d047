use std::path::Path;

use eyre::{Result, bail};
use healthgen_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
use healthgen_core::{GeneratedFile, WriteResult};
use healthgen_definition::Definition;

use crate::files::{EXTENSIONS_FILENAME, HealthChecksExtensionsCs};

/// Namespace of the generated extension class unless overridden.
pub const DEFAULT_NAMESPACE: &str = "AspNetCore.HealthChecks.Generator";

/// C# generator that produces ASP.NET Core health check registrations
pub struct Generator<'a> {
    definition: &'a Definition,
    namespace: String,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        Ok(vec![PreviewFile {
            path: EXTENSIONS_FILENAME.to_string(),
            content: self.render(),
        }])
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let file = self.extensions_file();
        let path = file.path(output_dir);
        let mut result = GenerateResult::default();

        match file.write(output_dir)? {
            WriteResult::Written => result.written.push(path),
            WriteResult::Skipped => result.skipped.push(path),
        }

        tracing::debug!(
            dir = %output_dir.display(),
            written = result.written.len(),
            "generated C# health checks"
        );
        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(definition: &'a Definition) -> Self {
        Self {
            definition,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    /// Place the extension class in another namespace.
    ///
    /// Fails unless `namespace` is a dotted sequence of C# identifiers.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Result<Self> {
        let namespace = namespace.into();
        if !is_valid_namespace(&namespace) {
            bail!("invalid C# namespace '{}'", namespace);
        }
        self.namespace = namespace;
        Ok(self)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Render the extension class without touching the filesystem.
    pub fn render(&self) -> String {
        let content = self.extensions_file().render();
        tracing::debug!(
            definition = self.definition.name(),
            dependencies = self.definition.len(),
            bytes = content.len(),
            "rendered C# health checks"
        );
        content
    }

    fn extensions_file(&self) -> HealthChecksExtensionsCs {
        HealthChecksExtensionsCs::new(self.definition, &self.namespace)
    }
}

fn is_valid_namespace(namespace: &str) -> bool {
    !namespace.is_empty() && namespace.split('.').all(is_identifier)
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}
