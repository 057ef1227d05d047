//! Compilation context produced by the pipeline.

use healthgen_definition::Definition;

use super::diagnostic::{Diagnostic, Severity};

/// The definition together with everything the lints had to say about it.
#[derive(Debug)]
pub struct CompilationContext {
    /// The definition being checked.
    pub definition: Definition,
    /// Diagnostics collected by the lints.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context from a definition.
    pub fn new(definition: Definition) -> Self {
        Self {
            definition,
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Add a diagnostic.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Consume the context, keeping only the definition.
    pub fn into_definition(self) -> Definition {
        self.definition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let ctx = CompilationContext::new(Definition::new("svc", Vec::new()));
        assert!(ctx.diagnostics.is_empty());
        assert!(!ctx.has_errors());
        assert_eq!(ctx.definition.name(), "svc");
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = CompilationContext::new(Definition::new("svc", Vec::new()));

        ctx.add_diagnostic(Diagnostic::error("test", "test error"));
        ctx.add_diagnostic(Diagnostic::warning("test", "test warning"));
        ctx.add_diagnostic(Diagnostic::info("test", "just info"));

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
    }
}
