//! Lint for URI dependencies without a scheme.

use healthgen_definition::{Definition, DependencyKind};

use super::super::{Lint, lint::dependency_location};
use crate::pipeline::Diagnostic;

/// Lint that warns when a `uri` dependency is not an absolute URI.
///
/// `new Uri(...)` throws on relative values at startup, long after the code
/// was generated.
pub struct UriSchemeLint;

impl Lint for UriSchemeLint {
    fn name(&self) -> &'static str {
        "uri-scheme"
    }

    fn description(&self) -> &'static str {
        "Check that uri dependencies are absolute URIs"
    }

    fn check(&self, definition: &Definition, diagnostics: &mut Vec<Diagnostic>) {
        for dependency in definition.dependencies() {
            if dependency.kind() != DependencyKind::Uri {
                continue;
            }
            let target = dependency.connection_string();
            if target.trim().is_empty() || has_scheme(target) {
                continue;
            }
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!(
                        "uri dependency '{}' has no scheme: '{}'",
                        dependency.name(),
                        target
                    ),
                )
                .at(dependency_location(dependency.name())),
            );
        }
    }
}

fn has_scheme(target: &str) -> bool {
    match target.split_once("://") {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
