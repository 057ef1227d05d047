use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use healthgen_definition::DefinitionFile;

use super::UnwrapOrExit;
use crate::{
    discovery,
    ops::{self, GenerateOptions},
    reports::{GenerateReport, NotConfigured, Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Candidate input files; the first ending in health.yml is used
    pub files: Vec<PathBuf>,

    /// Directory searched for candidates when no files are given
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Namespace for the generated extension class
    #[arg(long)]
    pub namespace: Option<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let report = self.build_report()?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn build_report(&self) -> Result<GenerateReport> {
        let Some(path) = discovery::find_definition(&self.files, &self.dir)? else {
            return ops::clear(NotConfigured::NoDefinitionFile, &self.output, self.dry_run);
        };

        let file = DefinitionFile::open(&path).unwrap_or_exit();
        let Some(definition) = file.definition() else {
            return ops::clear(
                NotConfigured::BlankDefinition(path),
                &self.output,
                self.dry_run,
            );
        };

        ops::generate(
            definition,
            file.path(),
            GenerateOptions {
                output_dir: &self.output,
                namespace: self.namespace.as_deref(),
                dry_run: self.dry_run,
            },
        )
    }
}
