//! Configuration system for drivepath.
//!
//! Configuration is optional: with no files and no environment variables the
//! built-in defaults apply (process working directory, `\` separator, JSON
//! output).
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`DRIVEPATH_*`)
//! 3. An explicit file (via `ConfigBuilder::with_file`)
//! 4. Project config (`drivepath.yaml`, nearest ancestor)
//! 5. User config (`~/.drivepath/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use drivepath::config::{Config, ConfigBuilder};
//! use drivepath::PathResolver;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         working_dir: Some("\\\\build\\share".to_string()),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! let resolver = PathResolver::from_config(&config);
//! assert_eq!(resolver.resolve(&["out"]).unwrap(), "\\\\build\\share\\out");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
