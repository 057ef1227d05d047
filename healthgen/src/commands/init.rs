use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use healthgen_codegen::generation::HealthYml;
use healthgen_core::{GeneratedFile, WriteResult};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create health.yml in
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Service name written into the definition (defaults to the directory name)
    #[arg(short, long)]
    pub name: Option<String>,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let name = match &self.name {
            Some(name) => name.clone(),
            None => Self::directory_name(&self.dir)?,
        };

        let file = HealthYml::new(name);
        let path = file.path(&self.dir);

        match file.write(&self.dir)? {
            WriteResult::Written => {
                println!("Created {}", path.display());
                println!();
                println!("Next steps:");
                println!("  healthgen check -c {}", path.display());
                println!("  healthgen generate");
            }
            WriteResult::Skipped => {
                println!("{} already exists; left unchanged", path.display());
            }
        }

        Ok(())
    }

    fn directory_name(dir: &Path) -> Result<String> {
        let dir = if dir == Path::new(".") {
            std::env::current_dir().wrap_err("Failed to get current directory")?
        } else {
            dir.to_path_buf()
        };

        dir.file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| eyre::eyre!("'{}' has no valid directory name", dir.display()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use healthgen_definition::Definition;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_init_creates_definition() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("orders-api");

        InitCommand {
            dir: dir.clone(),
            name: None,
        }
        .run()
        .unwrap();

        let definition = Definition::from_file(dir.join("health.yml")).unwrap();
        assert_eq!(definition.name(), "orders-api");
    }

    #[test]
    fn test_init_never_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("health.yml");
        fs::write(&path, "name: mine\n").unwrap();

        InitCommand {
            dir: temp.path().to_path_buf(),
            name: Some("other".to_string()),
        }
        .run()
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "name: mine\n");
    }
}
