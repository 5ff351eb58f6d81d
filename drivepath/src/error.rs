//! Error types for the drivepath library.
//!
//! Path manipulation itself never fails on malformed text: every operation
//! degrades to a documented default. The variants here cover the few
//! contract violations that can surface to a caller, plus the configuration
//! layer.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a drivepath error.
///
/// # Examples
///
/// ```
/// use drivepath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("C:\\".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the drivepath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A separator candidate was not `/` or `\`.
    ///
    /// [`separate`](crate::separate) recovers from this by falling back to
    /// the default separator; only the typed constructors report it.
    #[error("invalid separator {value:?}: expected '/' or '\\'")]
    InvalidSeparator {
        /// The rejected candidate.
        value: String,
    },

    /// No input carried a drive or UNC root and the fallback working
    /// directory could not be determined.
    #[error("working directory unavailable: {reason}")]
    WorkingDirectoryUnavailable {
        /// Why the working directory could not be supplied.
        reason: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A JSON (de)serialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error comes from the configuration layer.
    ///
    /// Unreadable YAML surfaces as [`Error::Validation`] naming the file, so
    /// every configuration failure is a validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use drivepath::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "working_dir".to_string(),
    ///     message: "cannot be empty".to_string(),
    /// };
    /// assert!(err.is_configuration());
    /// ```
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
