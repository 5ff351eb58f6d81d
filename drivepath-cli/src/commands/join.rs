//! Command to join paths.

use crate::error::CliError;
use crate::utils::{load_configuration, resolver, GlobalOptions};
use clap::Args;

/// Join paths with `\` and normalize; the drive is stripped from the output.
#[derive(Args)]
pub struct JoinCommand {
    /// Paths to join, in order
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        println!("{}", resolver(&config).join(&self.paths)?);
        Ok(())
    }
}
