use std::path::{Path, PathBuf};

use crate::{Definition, Result, parse::read_definition, parse_optional};

/// Every path ending with this suffix is a health definition file.
pub const DEFINITION_FILE_SUFFIX: &str = "health.yml";

/// Return the first candidate whose path ends with [`DEFINITION_FILE_SUFFIX`].
///
/// The match is a plain suffix test on the path text, so `api.health.yml`
/// and `deploy/health.yml` both qualify.
pub fn locate_definition<I, P>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    candidates
        .into_iter()
        .map(|p| p.as_ref().to_path_buf())
        .find(|p| p.to_string_lossy().ends_with(DEFINITION_FILE_SUFFIX))
}

/// A health definition file with both raw content and parsed definition.
#[derive(Debug)]
pub struct DefinitionFile {
    path: PathBuf,
    content: String,
    definition: Option<Definition>,
}

impl DefinitionFile {
    /// Open and parse a definition file.
    ///
    /// A file with no YAML content opens successfully with no definition.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = read_definition(&path)?;
        let definition = parse_optional(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            definition,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed definition, if the file declares one.
    pub fn definition(&self) -> Option<&Definition> {
        self.definition.as_ref()
    }

    pub fn into_definition(self) -> Option<Definition> {
        self.definition
    }
}
