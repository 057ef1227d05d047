//! Starter `health.yml` definition.

use std::path::{Path, PathBuf};

use healthgen_core::{FileRules, GeneratedFile, Overwrite};
use healthgen_definition::DEFAULT_FILENAME;

use crate::builder::CodeBuilder;

/// The starter definition written by `healthgen init`.
///
/// Never overwrites an existing file unless asked to.
pub struct HealthYml {
    pub name: String,
    pub overwrite: Overwrite,
}

impl HealthYml {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            overwrite: Overwrite::IfMissing,
        }
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }
}

impl GeneratedFile for HealthYml {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(DEFAULT_FILENAME)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite,
            header: None,
        }
    }

    fn render(&self) -> String {
        CodeBuilder::yaml()
            .comment("#", "Health checks registered by AddDefinitionFileHealthChecks().")
            .comment("#", "Supported types: uri, sqlserver")
            .line(&format!("name: {}", yaml_scalar(&self.name)))
            .line("dependencies:")
            .indent()
            .line("- name: api")
            .indent()
            .line("type: uri")
            .line("connectionString: https://localhost:5001/health")
            .line("tags:")
            .indent()
            .line("- live")
            .dedent()
            .dedent()
            .line("- name: database")
            .indent()
            .line("type: sqlserver")
            .line("connectionString: Server=localhost;Database=app;Trusted_Connection=True")
            .line("tags:")
            .indent()
            .line("- ready")
            .dedent()
            .dedent()
            .dedent()
            .build()
    }
}

/// Quote the scalar when a plain YAML scalar would change its meaning.
fn yaml_scalar(value: &str) -> String {
    let plain = !value.is_empty()
        && value.trim() == value
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ' '))
        && value.starts_with(|c: char| c.is_ascii_alphabetic());
    if plain {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', "''"))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use healthgen_core::WriteResult;
    use healthgen_definition::{DependencyKind, parse_definition};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_starter_parses() {
        let yml = HealthYml::new("orders-api");
        let definition = parse_definition(&yml.render(), "health.yml").unwrap();

        assert_eq!(definition.name(), "orders-api");
        assert_eq!(definition.len(), 2);
        assert_eq!(definition.count_of(DependencyKind::Uri), 1);
        assert_eq!(definition.count_of(DependencyKind::SqlServer), 1);
        assert!(definition.dependencies()[1].has_tag("ready"));
    }

    #[test]
    fn test_name_is_quoted_when_needed() {
        let yml = HealthYml::new("it's: odd");
        let definition = parse_definition(&yml.render(), "health.yml").unwrap();
        assert_eq!(definition.name(), "it's: odd");
    }

    #[test]
    fn test_existing_file_kept() {
        let temp = TempDir::new().unwrap();
        let path = HealthYml::new("svc").path(temp.path());
        fs::write(&path, "name: mine\n").unwrap();

        let result = HealthYml::new("svc").write(temp.path()).unwrap();
        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "name: mine\n");

        let result = HealthYml::new("svc")
            .with_overwrite(Overwrite::Always)
            .write(temp.path())
            .unwrap();
        assert_eq!(result, WriteResult::Written);
        assert!(fs::read_to_string(&path).unwrap().contains("name: svc"));
    }
}
