use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        write_with_rules(&path, &self.rules(), || self.render())
    }
}

fn write_with_rules(
    path: &Path,
    rules: &FileRules,
    content: impl FnOnce() -> String,
) -> Result<WriteResult> {
    match rules.overwrite {
        Overwrite::Always => {
            write_file(path, &content())?;
            Ok(WriteResult::Written)
        }
        Overwrite::IfMissing => {
            if path.exists() {
                Ok(WriteResult::Skipped)
            } else {
                write_file(path, &content())?;
                Ok(WriteResult::Written)
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Rules for generated output that is replaced on every run.
    pub fn always_overwrite() -> Self {
        Self::default()
    }

    /// Rules for scaffolding that must never clobber user edits.
    pub fn if_missing() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
            header: None,
        }
    }

    /// Attach the header written at the top of the file.
    pub fn with_header(mut self, header: &'static str) -> Self {
        self.header = Some(header);
        self
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Only create if file doesn't exist (starter definitions)
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }
}
