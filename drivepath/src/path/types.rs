//! Core value types for path handling.
//!
//! Everything here is transient: each top-level operation builds its own
//! values and nothing is shared between calls.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::separator::{is_separator, BACK_SEPARATOR};

/// A drive letter (`C:`) or UNC host+share prefix (`\\server\share`).
///
/// An empty drive means no input carried one.
///
/// # Examples
///
/// ```
/// use drivepath::path::Drive;
///
/// let drive = Drive::new("//server/share");
/// assert_eq!(drive.canonical(), "\\\\server\\share");
/// assert!(Drive::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Drive(String);

impl Drive {
    /// Wrap an extracted drive token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The token as it appeared in the input.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether no drive was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the token is a UNC prefix rather than a drive letter.
    #[must_use]
    pub fn is_unc(&self) -> bool {
        self.0.starts_with(is_separator)
    }

    /// The token with every separator rewritten to `\`.
    ///
    /// Each separator is replaced one for one; runs are not collapsed, so a
    /// UNC prefix keeps its leading double separator.
    #[must_use]
    pub fn canonical(&self) -> String {
        self.0
            .chars()
            .map(|c| if is_separator(c) { BACK_SEPARATOR } else { c })
            .collect()
    }
}

impl fmt::Display for Drive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A path decomposed into its structural parts.
///
/// Produced by [`parse`](crate::parse) and consumed by
/// [`format`](crate::format). Every field is always present and empty when
/// not applicable; missing keys deserialize as empty strings.
///
/// # Examples
///
/// ```
/// use drivepath::{parse, ParsedPath};
///
/// let parsed = parse("C:\\docs\\report.txt");
/// assert_eq!(parsed, ParsedPath {
///     root: "C:\\".to_string(),
///     dir: "C:\\docs".to_string(),
///     base: "report.txt".to_string(),
///     name: "report".to_string(),
///     ext: ".txt".to_string(),
/// });
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedPath {
    /// Drive plus at most one leading separator.
    pub root: String,
    /// Root prefix plus directory name; `.` stands in for a bare name.
    pub dir: String,
    /// Final component, `name + ext`.
    pub base: String,
    /// Final component without its extension.
    pub name: String,
    /// Extension including its leading dot.
    pub ext: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_letter() {
        let drive = Drive::new("C:");
        assert_eq!(drive.as_str(), "C:");
        assert_eq!(drive.canonical(), "C:");
        assert!(!drive.is_unc());
        assert!(!drive.is_empty());
    }

    #[test]
    fn test_drive_unc_canonical_keeps_double_separator() {
        let drive = Drive::new("/\\host//share");
        assert!(drive.is_unc());
        assert_eq!(drive.canonical(), "\\\\host\\\\share");
    }

    #[test]
    fn test_parsed_path_missing_keys_default_to_empty() {
        let parsed: ParsedPath = serde_json::from_str(r#"{"name":"a","ext":".b"}"#).unwrap();
        assert_eq!(parsed.root, "");
        assert_eq!(parsed.dir, "");
        assert_eq!(parsed.base, "");
        assert_eq!(parsed.name, "a");
        assert_eq!(parsed.ext, ".b");
    }
}
