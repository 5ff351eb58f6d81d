//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, FormatCommand, JoinCommand, NamespacedCommand, NormalizeCommand,
    ParseCommand, ResolveCommand, SeparateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lexical, drive-aware path manipulation.
#[derive(Parser)]
#[command(name = "drivepath")]
#[command(version, about = "Resolve, join and parse drive-aware paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file as well
    #[arg(long, value_name = "FILE", global = true, env = "DRIVEPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Fallback root used when no input carries a drive
    #[arg(long, value_name = "DIR", global = true, env = "DRIVEPATH_WORKING_DIR")]
    pub working_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Split a path into root, dir, base, name and ext
    Parse(ParseCommand),

    /// Build a path from its parts
    Format(FormatCommand),

    /// Normalize a single path (drive stripped)
    Normalize(NormalizeCommand),

    /// Join paths and normalize the result (drive stripped)
    Join(JoinCommand),

    /// Resolve paths into one drive-qualified path
    Resolve(ResolveCommand),

    /// Collapse separator runs into one separator
    Separate(SeparateCommand),

    /// Resolve a path and print its namespaced form
    Namespaced(NamespacedCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
