//! Utility functions for CLI operations.
//!
//! Configuration loading and resolver construction shared by the commands.

use crate::error::CliError;
use drivepath::{Config, ConfigBuilder, PathResolver};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
///
/// Verbosity flags are not carried here; `main` hands them straight to the
/// logger.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Extra configuration file.
    pub config: Option<PathBuf>,

    /// Fallback root overriding every configuration source.
    pub working_dir: Option<String>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        builder = builder.with_file(path);
    }

    if let Some(ref dir) = global.working_dir {
        builder = builder.with_config(Config {
            working_dir: Some(dir.clone()),
            ..Default::default()
        });
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Build a resolver honouring the configured working directory.
pub fn resolver(config: &Config) -> PathResolver {
    PathResolver::from_config(config)
}
