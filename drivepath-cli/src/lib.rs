//! Library exports for drivepath-cli.
//!
//! This module exports the CLI structure for use by the benches and the
//! build script.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

// Re-export CLI for build script
pub use cli::Cli;
