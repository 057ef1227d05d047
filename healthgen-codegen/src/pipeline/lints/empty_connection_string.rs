//! Lint for blank connection strings.

use healthgen_definition::Definition;

use super::super::{Lint, lint::dependency_location};
use crate::pipeline::Diagnostic;

/// Lint that warns about empty or whitespace-only connection strings.
pub struct EmptyConnectionStringLint;

impl Lint for EmptyConnectionStringLint {
    fn name(&self) -> &'static str {
        "empty-connection-string"
    }

    fn description(&self) -> &'static str {
        "Warn about dependencies with a blank connection string"
    }

    fn check(&self, definition: &Definition, diagnostics: &mut Vec<Diagnostic>) {
        for dependency in definition.dependencies() {
            if dependency.connection_string().trim().is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "dependency '{}' has an empty connection string",
                            dependency.name()
                        ),
                    )
                    .at(dependency_location(dependency.name())),
                );
            }
        }
    }
}
