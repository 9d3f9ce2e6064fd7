use std::path::PathBuf;

use apigen_core::{File, FileRules, WriteResult};
use apigen_spec::{CONFIG_FILE, Config};
use clap::Args;
use eyre::{Context, Result, bail};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create apigen.toml in
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let path = self.dir.join(CONFIG_FILE);

        let written = File::new(&path, Config::template())
            .with_rules(FileRules::create_once())
            .write()
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

        if written == WriteResult::Skipped {
            bail!("{} already exists", path.display());
        }

        println!("Created {}", path.display());
        println!();
        println!("Next steps:");
        println!("  edit [input] spec to point at your OpenAPI JSON document");
        println!("  apigen generate");

        Ok(())
    }
}
