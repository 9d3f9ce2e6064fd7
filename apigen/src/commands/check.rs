use clap::Args;
use eyre::Result;

use super::InputArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub input: InputArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = self.input.load_config();
        let spec_path = config.input.spec.clone();
        let document = InputArgs::open_document(&config);

        let report = ops::check(document, config, &spec_path)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
