//! Environment variable overrides.
//!
//! `DRIVEPATH_*` variables override values from configuration files.

use std::env;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::path::Separator;

/// Overrides the fallback working directory.
pub const WORKING_DIR_ENV: &str = "DRIVEPATH_WORKING_DIR";

/// Overrides the default separator (`/` or `\`).
pub const SEPARATOR_ENV: &str = "DRIVEPATH_SEPARATOR";

/// Overrides the parse output format (`json` or `human`).
pub const OUTPUT_FORMAT_ENV: &str = "DRIVEPATH_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use drivepath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a variable holds an unusable value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(dir) = env::var(WORKING_DIR_ENV) {
            config.working_dir = Some(dir);
        }

        if let Ok(value) = env::var(SEPARATOR_ENV) {
            let separator =
                Separator::try_from(value.as_str()).map_err(|e| Error::Validation {
                    field: SEPARATOR_ENV.into(),
                    message: e.to_string(),
                })?;
            config.separator = Some(separator);
        }

        if let Ok(value) = env::var(OUTPUT_FORMAT_ENV) {
            let format = value
                .parse::<OutputFormat>()
                .map_err(|e| Error::Validation {
                    field: OUTPUT_FORMAT_ENV.into(),
                    message: e.to_string(),
                })?;
            config.output_format = Some(format);
        }

        Ok(())
    }
}
