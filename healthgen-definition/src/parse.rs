//! Definition parsing from files and strings.

use std::{path::Path, str::FromStr};

use indexmap::IndexSet;
use serde::Deserialize;

use crate::{Definition, Error, Result, error::SourceContext, validate::ParseContext};

/// Filename used in diagnostics when none is supplied.
pub const DEFAULT_FILENAME: &str = "health.yml";

/// `health.yml` as written, before dependency types are resolved.
///
/// Keys use camelCase in YAML (`connectionString`) and map onto the
/// snake_case fields below.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct RawDefinition {
    pub name: String,
    #[serde(default)]
    pub dependencies: Vec<RawDependency>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct RawDependency {
    pub name: String,
    #[serde(default)]
    pub connection_string: Option<String>,
    /// Connection string spelling of the URI-only schema.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub tags: IndexSet<String>,
}

impl FromStr for Definition {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_definition(s, DEFAULT_FILENAME)
    }
}

impl Definition {
    /// Parse a health definition file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = read_definition(path)?;
        parse_definition(&content, &path.display().to_string())
    }

    /// Parse a health definition with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_definition(content, filename)
    }
}

pub(crate) fn read_definition(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })
}

/// Parse a definition from content with the given filename for error reporting.
///
/// Every dependency type is resolved before the [`Definition`] is built, so an
/// unsupported type anywhere in the file fails the whole parse.
pub fn parse_definition(content: &str, filename: &str) -> Result<Definition> {
    let source_ctx = SourceContext::new(content, filename);
    let raw: RawDefinition =
        serde_saphyr::from_str(content).map_err(|e| source_ctx.parse_error(e))?;

    let definition = ParseContext::new(&source_ctx).resolve(raw)?;
    tracing::debug!(
        file = filename,
        name = definition.name(),
        dependencies = definition.len(),
        "parsed health definition"
    );
    Ok(definition)
}

/// Like [`parse_definition`], but a blank document means "nothing configured".
pub fn parse_optional(content: &str, filename: &str) -> Result<Option<Definition>> {
    if is_blank_document(content) {
        tracing::debug!(file = filename, "health definition is blank");
        return Ok(None);
    }
    parse_definition(content, filename).map(Some)
}

/// True when the text holds no YAML content: only whitespace, comments and
/// document markers, or a single explicit null scalar.
pub fn is_blank_document(content: &str) -> bool {
    let mut lines = content.lines().map(str::trim).filter(|line| {
        !(line.is_empty() || line.starts_with('#') || *line == "---" || *line == "...")
    });

    match (lines.next(), lines.next()) {
        (None, _) => true,
        (Some(line), None) => is_null_scalar(line),
        _ => false,
    }
}

fn is_null_scalar(line: &str) -> bool {
    let value = line.split(" #").next().unwrap_or(line).trim_end();
    let value = value.strip_prefix("--- ").unwrap_or(value).trim();
    matches!(value, "~" | "null" | "Null" | "NULL")
}
