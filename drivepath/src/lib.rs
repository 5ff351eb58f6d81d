#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # drivepath
//!
//! Lexical, drive-aware path manipulation.
//!
//! Paths are treated as strings: nothing is looked up on disk. Drive letters
//! (`C:`) and UNC prefixes (`\\server\share`) are recognized on every
//! platform, and both `/` and `\` count as separators. Resolved output is
//! always written with `\`.
//!
//! ## Core Types
//!
//! - [`PathResolver`]: resolve, join, normalize and namespace paths
//! - [`ParsedPath`] with [`parse`] and [`format`]: structural decomposition
//! - [`Separator`] and [`separate`]: separator normalization
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use drivepath::{parse, separate, FixedWorkingDirectory, PathResolver};
//!
//! let resolver = PathResolver::new()
//!     .with_working_dir(FixedWorkingDirectory::new("C:\\work"));
//! assert_eq!(resolver.resolve(&["a/b", "../c"]).unwrap(), "C:\\work\\a\\c");
//! assert_eq!(resolver.join(&["/x", "y", ".."]).unwrap(), "\\x");
//!
//! assert_eq!(separate("a//b\\c", '/'), "a/b/c");
//! assert_eq!(parse("dir/file.tar.gz").ext, ".gz");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    format, join, normalize, parse, resolve, separate, to_namespaced_path, Drive,
    FixedWorkingDirectory, ParsedPath, PathResolver, Separator, SystemWorkingDirectory,
    WorkingDirectory, BACK_SEPARATOR, DELIMITER, FORWARD_SEPARATOR, NAMESPACE_PREFIX,
};
