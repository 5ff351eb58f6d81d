//! Command to resolve paths into one drive-qualified path.

use crate::error::CliError;
use crate::utils::{load_configuration, resolver, GlobalOptions};
use clap::Args;

/// Resolve paths left to right into a drive-qualified path.
///
/// The last path carrying a drive decides the drive; the last path starting
/// with a separator discards the ones before it.
#[derive(Args)]
pub struct ResolveCommand {
    /// Paths to resolve, in order
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        println!("{}", resolver(&config).resolve(&self.paths)?);
        Ok(())
    }
}
