use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use healthgen_definition::DefinitionFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to health.yml (defaults to ./health.yml)
    #[arg(short, long, default_value = "health.yml")]
    pub config: PathBuf,

    /// Print diagnostics as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = DefinitionFile::open(&self.config).unwrap_or_exit();
        let report = ops::check(file.definition(), file.path())?;

        if self.json {
            println!("{}", report.to_json()?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
