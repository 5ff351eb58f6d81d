//! Lexical path manipulation with drive and UNC awareness.
//!
//! Nothing in this module touches the filesystem. Paths are plain strings;
//! both `/` and `\` are separators on every platform.
//!
//! # Key Concepts
//!
//! ## Drives
//!
//! A drive is either a drive letter (`C:`) or a UNC host+share prefix
//! (`\\server\share`). Among several inputs, the last one carrying a drive
//! decides the drive of the result.
//!
//! ## Root markers
//!
//! An input that begins with a separator (and is not a UNC prefix) is
//! absolute: every input before the last such input is discarded.
//!
//! ## Resolution
//!
//! `.` segments and empty segments disappear, `..` removes the segment before
//! it. Above a root, `..` has nowhere to go and is dropped; on a relative
//! base it is kept and the result stays relative. When no input has a drive,
//! the working directory supplies the base; it is injected through
//! [`WorkingDirectory`].
//!
//! # Examples
//!
//! ```
//! use drivepath::path::{FixedWorkingDirectory, PathResolver};
//!
//! let resolver = PathResolver::new()
//!     .with_working_dir(FixedWorkingDirectory::new("C:\\projects"));
//!
//! assert_eq!(resolver.resolve(&["app", "./src/../tests"]).unwrap(), "C:\\projects\\app\\tests");
//! assert_eq!(resolver.resolve(&["app", "/etc"]).unwrap(), "C:\\etc");
//! assert_eq!(resolver.normalize("C:/temp//foo/bar/..").unwrap(), "\\temp\\foo");
//! ```
//!
//! Structural parsing is independent of resolution:
//!
//! ```
//! use drivepath::path::{format, parse};
//!
//! let parsed = parse("C:\\path\\dir\\file.txt");
//! assert_eq!(parsed.dir, "C:\\path\\dir");
//! assert_eq!(format(&parsed), "C:\\path\\dir\\file.txt");
//! ```

pub mod drive;
pub mod parse;
pub mod resolver;
pub mod segment;
pub mod separator;
mod types;
pub mod working_dir;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use parse::{format, parse};
pub use resolver::{join, normalize, resolve, to_namespaced_path, PathResolver, NAMESPACE_PREFIX};
pub use separator::{
    is_separator, separate, Separator, BACK_SEPARATOR, DELIMITER, FORWARD_SEPARATOR,
};
pub use types::{Drive, ParsedPath};
pub use working_dir::{FixedWorkingDirectory, SystemWorkingDirectory, WorkingDirectory};
