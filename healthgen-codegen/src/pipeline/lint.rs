//! Lint trait for definition checks.

use healthgen_definition::Definition;

use super::Diagnostic;

/// A lint that checks a definition for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A short description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the definition and add any diagnostics.
    fn check(&self, definition: &Definition, diagnostics: &mut Vec<Diagnostic>);

    /// Name and description together.
    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}

/// Name and description of a lint, for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Location string for a dependency, e.g. `dependencies.db`.
pub(crate) fn dependency_location(name: &str) -> String {
    format!("dependencies.{}", name)
}
