use std::path::{Path, PathBuf};

use healthgen_core::{FileRules, GeneratedFile};
use healthgen_definition::Definition;

use super::usings;
use crate::{
    CSharpFile,
    ast::{Class, Method},
    literal,
    registration::registration_chain,
};

/// Marker Roslyn uses to exclude a file from analyzers.
pub const GENERATED_HEADER: &str = "<auto-generated>";

/// Output file name, relative to the output directory.
pub const EXTENSIONS_FILENAME: &str = "HealthChecksGeneratorExtensions.g.cs";

pub const EXTENSIONS_CLASS: &str = "HealthChecksDefinitionFileExtensions";

pub const REGISTRATION_METHOD: &str = "AddDefinitionFileHealthChecks";

/// The generated `IServiceCollection` extension (always regenerated).
pub struct HealthChecksExtensionsCs {
    pub definition_name: String,
    pub namespace: String,
    pub registrations: String,
}

impl HealthChecksExtensionsCs {
    pub fn new(definition: &Definition, namespace: impl Into<String>) -> Self {
        Self {
            definition_name: definition.name().to_string(),
            namespace: namespace.into(),
            registrations: registration_chain(definition),
        }
    }
}

impl GeneratedFile for HealthChecksExtensionsCs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(EXTENSIONS_FILENAME)
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite().with_header(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        let method = Method::new(format!(
            "public static IServiceCollection {}(this IServiceCollection source)",
            REGISTRATION_METHOD
        ))
        .statement(self.registrations.as_str())
        .statement("return source;");

        CSharpFile::new()
            .header_line(GENERATED_HEADER)
            .header_line(format!(
                "    Generated by healthgen from the '{}' health definition.",
                literal::comment_text(&self.definition_name)
            ))
            .header_line("    Changes to this file will be lost when the code is regenerated.")
            .header_line("</auto-generated>")
            .using(usings::system())
            .using(usings::dependency_injection())
            .namespace(&self.namespace)
            .add(Class::new("public static", EXTENSIONS_CLASS).member(method))
            .render()
    }
}
