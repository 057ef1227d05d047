use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use healthgen_definition::DefinitionFile;

use super::UnwrapOrExit;
use crate::reports::{ListReport, Report, TerminalOutput};

#[derive(Args)]
pub struct ListCommand {
    /// Path to health.yml (defaults to ./health.yml)
    #[arg(short, long, default_value = "health.yml")]
    pub config: PathBuf,

    /// Print the definition as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let file = DefinitionFile::open(&self.config).unwrap_or_exit();
        let report = ListReport {
            config_path: file.path().to_path_buf(),
            definition: file.into_definition(),
        };

        if self.json {
            println!("{}", report.to_json()?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
