//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for language-specific code generators.
///
/// Implement this trait to emit health-check registration code for a new
/// target language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "csharp")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "cs")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written
    pub written: Vec<PathBuf>,
    /// Files left untouched because they already existed
    pub skipped: Vec<PathBuf>,
}

impl GenerateResult {
    /// Total number of files considered.
    pub fn len(&self) -> usize {
        self.written.len() + self.skipped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
