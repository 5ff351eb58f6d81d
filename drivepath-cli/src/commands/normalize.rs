//! Command to normalize a single path.

use crate::error::CliError;
use crate::utils::{load_configuration, resolver, GlobalOptions};
use clap::Args;

/// Normalize one path; the drive is stripped from the output.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        println!("{}", resolver(&config).normalize(&self.path)?);
        Ok(())
    }
}
