//! Pipeline orchestrator.

use eyre::{Result, bail};
use healthgen_definition::Definition;

use super::{
    CompilationContext, Lint, LintInfo,
    lints::{
        DuplicateDependencyLint, EmptyConnectionStringLint, UntaggedDependencyLint, UriSchemeLint,
    },
};

/// Runs every configured lint over a definition.
///
/// Warnings are collected and returned in the context; any error-severity
/// diagnostic fails the run.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new().with_lint(MyLint).run(definition)?;
/// ```
pub struct Pipeline {
    lints: Vec<Box<dyn Lint>>,
}

impl Pipeline {
    /// Create a pipeline with the built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateDependencyLint),
                Box::new(UntaggedDependencyLint),
                Box::new(UriSchemeLint),
                Box::new(EmptyConnectionStringLint),
            ],
        }
    }

    /// Create a pipeline with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }

    /// Check a definition.
    pub fn run(&self, definition: Definition) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(definition);

        for lint in &self.lints {
            let before = ctx.diagnostics.len();
            lint.check(&ctx.definition, &mut ctx.diagnostics);
            tracing::debug!(
                lint = lint.name(),
                findings = ctx.diagnostics.len() - before,
                "ran lint"
            );
        }

        if ctx.has_errors() {
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
