//! Lint for dependencies without tags.

use healthgen_definition::Definition;

use super::super::{Lint, lint::dependency_location};
use crate::pipeline::Diagnostic;

/// Lint that warns about dependencies with no tags.
///
/// Health check endpoints usually filter by tag, so an untagged check is
/// never reported by a `ready` or `live` probe.
pub struct UntaggedDependencyLint;

impl Lint for UntaggedDependencyLint {
    fn name(&self) -> &'static str {
        "untagged-dependency"
    }

    fn description(&self) -> &'static str {
        "Warn about dependencies that carry no tags"
    }

    fn check(&self, definition: &Definition, diagnostics: &mut Vec<Diagnostic>) {
        for dependency in definition.dependencies() {
            if dependency.tags().is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("dependency '{}' has no tags", dependency.name()),
                    )
                    .at(dependency_location(dependency.name())),
                );
            }
        }
    }
}
