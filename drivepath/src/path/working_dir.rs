//! The fallback root collaborator.
//!
//! When none of the inputs to a resolution carry a drive or UNC prefix, the
//! working directory is prepended once as the base. It is injected through
//! [`WorkingDirectory`] so resolution stays a pure function of its inputs.

use std::env;

use crate::error::{Error, Result};

/// Supplies the fallback root for resolution.
#[cfg_attr(test, mockall::automock)]
pub trait WorkingDirectory: Send + Sync {
    /// Returns the working directory as a path string.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined.
    fn current_dir(&self) -> Result<String>;
}

/// The process working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemWorkingDirectory;

impl WorkingDirectory for SystemWorkingDirectory {
    fn current_dir(&self) -> Result<String> {
        let cwd = env::current_dir().map_err(|e| Error::WorkingDirectoryUnavailable {
            reason: e.to_string(),
        })?;
        cwd.into_os_string()
            .into_string()
            .map_err(|raw| Error::InvalidPath {
                path: raw.into(),
                reason: "working directory is not valid UTF-8".to_string(),
            })
    }
}

/// A fixed working directory, typically taken from configuration.
///
/// # Examples
///
/// ```
/// use drivepath::path::{FixedWorkingDirectory, WorkingDirectory};
///
/// let wd = FixedWorkingDirectory::new("C:\\work");
/// assert_eq!(wd.current_dir().unwrap(), "C:\\work");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedWorkingDirectory(String);

impl FixedWorkingDirectory {
    /// Create a provider that always returns `dir`.
    #[must_use]
    pub fn new(dir: impl Into<String>) -> Self {
        Self(dir.into())
    }
}

impl WorkingDirectory for FixedWorkingDirectory {
    fn current_dir(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}
