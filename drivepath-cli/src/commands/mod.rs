//! CLI command implementations.
//!
//! - `parse`: split a path into its parts
//! - `format`: build a path from its parts
//! - `normalize`: normalize one path
//! - `join`: join and normalize several paths
//! - `resolve`: resolve several paths to a drive-qualified path
//! - `separate`: collapse separator runs
//! - `namespaced`: namespaced form of a resolved path
//! - `completions`: shell completion scripts

pub mod completions;
pub mod format;
pub mod join;
pub mod namespaced;
pub mod normalize;
pub mod parse;
pub mod resolve;
pub mod separate;

pub use completions::CompletionsCommand;
pub use format::FormatCommand;
pub use join::JoinCommand;
pub use namespaced::NamespacedCommand;
pub use normalize::NormalizeCommand;
pub use parse::ParseCommand;
pub use resolve::ResolveCommand;
pub use separate::SeparateCommand;
