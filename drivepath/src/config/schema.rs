//! Configuration schema definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::path::Separator;

/// Complete configuration structure.
///
/// Every field is optional so that several sources can be layered; an unset
/// field falls through to the next source or the built-in default.
///
/// # Examples
///
/// ```
/// use drivepath::config::{Config, OutputFormat};
/// use drivepath::Separator;
///
/// let config = Config {
///     working_dir: Some("C:\\work".to_string()),
///     separator: Some(Separator::Forward),
///     output_format: Some(OutputFormat::Human),
/// };
/// assert_eq!(config.separator_or_default(), Separator::Forward);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Fallback root used when no input to a resolution carries a drive.
    pub working_dir: Option<String>,

    /// Separator written by `separate` when none is given.
    pub separator: Option<Separator>,

    /// Output format of structural parse results.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The configured separator, or `\`.
    #[must_use]
    pub fn separator_or_default(&self) -> Separator {
        self.separator.unwrap_or_default()
    }

    /// The configured output format, or JSON.
    #[must_use]
    pub fn output_format_or_default(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Output format for parse results.
///
/// # Examples
///
/// ```
/// use drivepath::config::OutputFormat;
///
/// let format: OutputFormat = "HUMAN".parse().unwrap();
/// assert_eq!(format, OutputFormat::Human);
/// assert_eq!(format.to_string(), "human");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON object with every field.
    #[default]
    Json,
    /// One `field: value` line per field.
    Human,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Human => write!(f, "human"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "human" => Ok(Self::Human),
            _ => Err(Error::Validation {
                field: "output_format".into(),
                message: format!("unknown output format {s:?}, expected 'json' or 'human'"),
            }),
        }
    }
}
