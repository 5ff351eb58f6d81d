//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::drive::carries_drive;
use crate::path::separator::is_separator;

/// Validates a merged configuration.
///
/// `separator` and `output_format` are already constrained by their types;
/// only free-form strings need checking here.
///
/// # Examples
///
/// ```
/// use drivepath::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let blank = Config { working_dir: Some("  ".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&blank).is_err());
///
/// let relative = Config { working_dir: Some("proj".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&relative).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref working_dir) = config.working_dir {
            Self::validate_working_dir(working_dir)?;
        }
        Ok(())
    }

    /// The fallback root must be non-blank, free of NUL bytes and rooted
    /// (a drive, a UNC prefix or a leading separator).
    fn validate_working_dir(value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: "working_dir".into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if value.contains('\0') {
            return Err(Error::Validation {
                field: "working_dir".into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        if !carries_drive(value) && !value.starts_with(is_separator) {
            return Err(Error::Validation {
                field: "working_dir".into(),
                message: format!("Must be rooted, got relative path '{value}'"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_working_dir(dir: &str) -> Config {
        Config {
            working_dir: Some(dir.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_working_dirs() {
        for dir in ["C:\\", "C:", "/home/user", "\\\\srv\\share", "//srv/share"] {
            assert!(ConfigValidator::validate(&with_working_dir(dir)).is_ok(), "{dir}");
        }
    }

    #[test]
    fn test_blank_working_dir_rejected() {
        let err = ConfigValidator::validate(&with_working_dir("")).unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "working_dir"));
        assert!(ConfigValidator::validate(&with_working_dir(" \t")).is_err());
    }

    #[test]
    fn test_nul_in_working_dir_rejected() {
        let err = ConfigValidator::validate(&with_working_dir("C:\\a\0b")).unwrap_err();
        assert!(err.to_string().contains("null bytes"));
    }

    #[test]
    fn test_relative_working_dir_rejected() {
        for dir in ["relative", "./proj", "..\\up"] {
            let err = ConfigValidator::validate(&with_working_dir(dir)).unwrap_err();
            assert!(err.to_string().contains("Must be rooted"), "{dir}");
        }
    }
}
