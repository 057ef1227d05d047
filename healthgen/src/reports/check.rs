//! Check command report data structures.

use std::path::PathBuf;

use healthgen_codegen::pipeline::{Diagnostic, Severity};
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from definition validation.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Path to the definition file.
    pub config_path: PathBuf,
    /// Definition name, or `None` when the file is blank.
    pub name: Option<String>,
    /// Number of dependencies.
    pub dependency_count: usize,
    /// Everything the lints reported.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// The report as a JSON document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct Json<'a> {
            valid: bool,
            #[serde(flatten)]
            report: &'a CheckReport,
        }

        serde_json::to_string_pretty(&Json {
            valid: self.is_valid(),
            report: self,
        })
    }

    fn messages(&self, severity: Severity) -> impl Iterator<Item = String> + '_ {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
            .map(|d| match &d.location {
                Some(loc) => format!("{}\n  --> {}", d.message, loc),
                None => d.message.clone(),
            })
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in self.messages(Severity::Error) {
            out.error(&error);
        }

        for warning in self.messages(Severity::Warning) {
            out.warning(&warning);
        }

        for info in self.messages(Severity::Info) {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        match &self.name {
            Some(name) => {
                out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
                out.newline();
                out.preformatted(&format!(
                    "  {}: {} dependenc{}",
                    name,
                    self.dependency_count,
                    if self.dependency_count == 1 { "y" } else { "ies" }
                ));
            }
            None => out.preformatted(&format!(
                "✓ {} is empty; nothing is configured",
                self.config_path.display()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::BufferOutput;

    fn report(diagnostics: Vec<Diagnostic>) -> CheckReport {
        CheckReport {
            config_path: "health.yml".into(),
            name: Some("svc".to_string()),
            dependency_count: 2,
            diagnostics,
        }
    }

    #[test]
    fn test_valid() {
        assert_eq!(
            BufferOutput::render(&report(Vec::new())),
            "✓ health.yml is valid\n\n  svc: 2 dependencies"
        );
    }

    #[test]
    fn test_warnings_still_valid() {
        let report = report(vec![
            Diagnostic::warning("untagged-dependency", "dependency 'db' has no tags")
                .at("dependencies.db"),
        ]);

        assert!(report.is_valid());
        let rendered = BufferOutput::render(&report);
        assert!(rendered.starts_with(
            "warning: dependency 'db' has no tags\n  --> dependencies.db\n\n✓ health.yml is valid"
        ));
    }

    #[test]
    fn test_errors_invalid() {
        let report = report(vec![Diagnostic::error("custom", "broken")]);

        assert!(!report.is_valid());
        assert_eq!(BufferOutput::render(&report), "error: broken\n");
    }

    #[test]
    fn test_blank_definition() {
        let report = CheckReport {
            config_path: "health.yml".into(),
            name: None,
            dependency_count: 0,
            diagnostics: Vec::new(),
        };
        assert_eq!(
            BufferOutput::render(&report),
            "✓ health.yml is empty; nothing is configured"
        );
    }

    #[test]
    fn test_json() {
        let report = report(vec![
            Diagnostic::warning("uri-scheme", "no scheme").at("dependencies.api"),
        ]);

        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "valid": true,
                "config_path": "health.yml",
                "name": "svc",
                "dependency_count": 2,
                "diagnostics": [{
                    "severity": "warning",
                    "phase": "uri-scheme",
                    "message": "no scheme",
                    "location": "dependencies.api"
                }]
            })
        );
    }
}
