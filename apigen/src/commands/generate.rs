use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::InputArgs;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output directory (overrides output.dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Base URL baked into the client (overrides client.base_url)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Omit the generation timestamp from document headers
    #[arg(long)]
    pub no_timestamp: bool,

    /// Write per-phase pipeline snapshots to <output>/.apigen/debug
    #[arg(long)]
    pub visualize: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let mut config = self.input.load_config();
        if let Some(output) = &self.output {
            config.output.dir = output.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.client.base_url = base_url.clone();
        }
        if self.no_timestamp {
            config.generation.timestamp = false;
        }

        let document = InputArgs::open_document(&config);
        let report = ops::generate(
            document,
            config,
            GenerateOptions {
                dry_run: self.dry_run,
                visualize: self.visualize,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
