//! Command to print the namespaced form of a path.

use crate::error::CliError;
use crate::utils::{load_configuration, resolver, GlobalOptions};
use clap::Args;

/// Resolve a path and print it as `\\?\C:\...` or `\\?\UNC\host\share\...`.
#[derive(Args)]
pub struct NamespacedCommand {
    /// Path to convert
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl NamespacedCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        println!("{}", resolver(&config).to_namespaced_path(&self.path)?);
        Ok(())
    }
}
