mod check;
mod completions;
mod generate;
mod init;

use std::path::PathBuf;

use apigen_spec::{ApiDocument, CONFIG_FILE, Config, SpecFile};
use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;

/// Extension trait for exiting on document or config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for apigen_spec::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "apigen")]
#[command(version)]
#[command(about = "Generate a typed TypeScript client from an OpenAPI document")]
pub(crate) struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace); APIGEN_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the types, client, and helper documents
    Generate(GenerateCommand),

    /// Validate the API document without generating code
    Check(CheckCommand),

    /// Write a default apigen.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Arguments shared by commands that read an API document.
#[derive(Args)]
pub(crate) struct InputArgs {
    /// Path to apigen.toml (defaults to ./apigen.toml; missing means defaults)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// API document to read (overrides input.spec)
    #[arg(short, long)]
    pub spec: Option<PathBuf>,
}

impl InputArgs {
    /// Load the configuration with command-line overrides applied.
    pub fn load_config(&self) -> Config {
        let mut config = Config::load_or_default(&self.config).unwrap_or_exit();
        if let Some(spec) = &self.spec {
            config.input.spec = spec.clone();
        }
        config
    }

    /// Open the API document named by the configuration.
    pub fn open_document(config: &Config) -> ApiDocument {
        tracing::debug!(spec = %config.input.spec.display(), "reading API document");
        SpecFile::open(&config.input.spec)
            .unwrap_or_exit()
            .into_document()
    }
}
