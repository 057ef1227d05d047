//! Lint for duplicate dependency names.

use std::collections::HashMap;

use healthgen_definition::Definition;

use super::super::{Lint, lint::dependency_location};
use crate::pipeline::Diagnostic;

/// Lint that warns when two dependencies share a name.
///
/// The names become health check registration names, and ASP.NET Core only
/// fails on duplicates when the service starts.
pub struct DuplicateDependencyLint;

impl Lint for DuplicateDependencyLint {
    fn name(&self) -> &'static str {
        "duplicate-dependency"
    }

    fn description(&self) -> &'static str {
        "Detect dependencies registered under the same name"
    }

    fn check(&self, definition: &Definition, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<String, &str> = HashMap::new();

        for dependency in definition.dependencies() {
            let normalized = dependency.name().to_lowercase();
            if let Some(first) = seen.get(&normalized) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "duplicate dependency '{}' (conflicts with '{}')",
                            dependency.name(),
                            first
                        ),
                    )
                    .at(dependency_location(dependency.name())),
                );
            } else {
                seen.insert(normalized, dependency.name());
            }
        }
    }
}
