//! Separator constants and separator normalization.
//!
//! Both `/` and `\` are treated as separators everywhere in this crate,
//! independent of the host platform.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Path-list delimiter character.
pub const DELIMITER: char = ':';

/// Forward separator character.
pub const FORWARD_SEPARATOR: char = '/';

/// Back separator character; the canonical separator of resolved output.
pub const BACK_SEPARATOR: char = '\\';

/// [`BACK_SEPARATOR`] as a string, for joining.
pub(crate) const BACK_SEPARATOR_STR: &str = "\\";

/// Returns true for either separator character.
#[must_use]
pub const fn is_separator(c: char) -> bool {
    c == FORWARD_SEPARATOR || c == BACK_SEPARATOR
}

/// The separator written by [`Separator::separate`].
///
/// # Examples
///
/// ```
/// use drivepath::Separator;
///
/// assert_eq!(Separator::default(), Separator::Back);
/// assert_eq!(Separator::try_from('/').unwrap(), Separator::Forward);
/// assert!(Separator::try_from('?').is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Separator {
    /// `\`
    #[default]
    Back,
    /// `/`
    Forward,
}

impl Separator {
    /// The separator as a character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Back => BACK_SEPARATOR,
            Self::Forward => FORWARD_SEPARATOR,
        }
    }

    /// Replaces every run of `/` and `\` in `path` with this separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use drivepath::Separator;
    ///
    /// assert_eq!(Separator::Forward.separate("a//b\\\\c"), "a/b/c");
    /// assert_eq!(Separator::Back.separate("/a/b/"), "\\a\\b\\");
    /// ```
    #[must_use]
    pub fn separate(self, path: &str) -> String {
        let mut out = String::with_capacity(path.len());
        let mut in_run = false;
        for c in path.chars() {
            if is_separator(c) {
                if !in_run {
                    out.push(self.as_char());
                }
                in_run = true;
            } else {
                out.push(c);
                in_run = false;
            }
        }
        out
    }
}

impl TryFrom<char> for Separator {
    type Error = Error;

    fn try_from(value: char) -> Result<Self> {
        match value {
            BACK_SEPARATOR => Ok(Self::Back),
            FORWARD_SEPARATOR => Ok(Self::Forward),
            other => Err(Error::InvalidSeparator {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<&str> for Separator {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(Error::InvalidSeparator {
                value: value.to_string(),
            }),
        }
    }
}

impl From<Separator> for char {
    fn from(separator: Separator) -> Self {
        separator.as_char()
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Rewrites every run of separators in `path` to one `separator`.
///
/// A candidate that is not `/` or `\` falls back to `\`.
///
/// # Examples
///
/// ```
/// use drivepath::separate;
///
/// assert_eq!(separate("a//b\\\\c", '/'), "a/b/c");
/// assert_eq!(separate("a/b", '?'), "a\\b");
/// ```
#[must_use]
pub fn separate(path: &str, separator: char) -> String {
    let separator = Separator::try_from(separator).unwrap_or_else(|e| {
        log::debug!("{e}; falling back to '{BACK_SEPARATOR}'");
        Separator::default()
    });
    separator.separate(path)
}
