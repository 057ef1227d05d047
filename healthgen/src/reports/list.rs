//! List command report data structures.

use std::path::PathBuf;

use healthgen_definition::Definition;

use super::output::{Output, Report};

/// Report data listing a definition's dependencies.
#[derive(Debug)]
pub struct ListReport {
    /// Path to the definition file.
    pub config_path: PathBuf,
    /// The definition, or `None` when the file is blank.
    pub definition: Option<Definition>,
}

impl ListReport {
    /// The definition as JSON; a blank file lists as `null`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.definition)
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        let Some(definition) = &self.definition else {
            out.preformatted(&format!(
                "{} is empty; no dependencies defined",
                self.config_path.display()
            ));
            return;
        };

        out.key_value("Name", definition.name());

        if definition.is_empty() {
            out.preformatted("No dependencies defined");
            return;
        }

        out.newline();
        out.section(&format!("Dependencies ({})", definition.len()));
        for dependency in definition.dependencies() {
            let tags = dependency
                .tags()
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            out.list_item(&format!(
                "{} ({}) {} [{}]",
                dependency.name(),
                dependency.kind(),
                dependency.connection_string(),
                tags
            ));
        }
    }
}
