//! Main entry point for the drivepath CLI.
//!
//! Every library operation is available as a subcommand:
//! - `parse` / `format`: structural decomposition and its inverse
//! - `normalize`, `join`, `resolve`: lexical resolution
//! - `separate`: separator normalization
//! - `namespaced`: Windows namespaced form of a resolved path

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library log records through the stderr logger
    let logger = drivepath::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: could not install logger: {e}");
    }

    let global = GlobalOptions {
        config: cli.config,
        working_dir: cli.working_dir,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Parse(cmd) => cmd.execute(&global),
        cli::Command::Format(cmd) => cmd.execute(&global),
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Separate(cmd) => cmd.execute(&global),
        cli::Command::Namespaced(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
