//! Command to collapse separator runs.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;

/// Replace every run of `/` and `\` with one separator.
#[derive(Args)]
pub struct SeparateCommand {
    /// Path to rewrite
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Separator to write; anything but `/` or `\` falls back to `\`
    /// (default from configuration)
    #[arg(long, short = 's', value_name = "CHAR")]
    pub separator: Option<char>,
}

impl SeparateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let output = match self.separator {
            Some(c) => drivepath::separate(&self.path, c),
            None => load_configuration(global)?
                .separator_or_default()
                .separate(&self.path),
        };
        println!("{output}");
        Ok(())
    }
}
