//! Build script for drivepath-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR.
//!
//! The command structure is rebuilt here by hand because a build script
//! cannot depend on the crate being built. Keep it in sync with src/cli.rs.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn path_arg(help: &'static str) -> Arg {
    Arg::new("path").value_name("PATH").help(help).required(true)
}

fn paths_arg(help: &'static str) -> Arg {
    Arg::new("paths")
        .value_name("PATH")
        .help(help)
        .num_args(0..)
}

fn build_cli() -> Command {
    Command::new("drivepath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve, join and parse drive-aware paths")
        .long_about(
            "Lexical path manipulation that understands drive letters and UNC shares on every \
             platform. Nothing is read from the filesystem.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file as well")
                .value_name("FILE")
                .global(true)
                .env("DRIVEPATH_CONFIG"),
        )
        .arg(
            Arg::new("working-dir")
                .long("working-dir")
                .help("Fallback root used when no input carries a drive")
                .value_name("DIR")
                .global(true)
                .env("DRIVEPATH_WORKING_DIR"),
        )
        .subcommands(vec![
            Command::new("parse")
                .about("Split a path into root, dir, base, name and ext")
                .arg(path_arg("Path to parse"))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FORMAT")
                        .help("Output format: json or human"),
                ),
            Command::new("format")
                .about("Build a path from its parts")
                .args(["root", "dir", "base", "name", "ext", "json"].map(|name| {
                    Arg::new(name)
                        .long(name)
                        .help(format!("Value of the {name} part"))
                })),
            Command::new("normalize")
                .about("Normalize a single path (drive stripped)")
                .arg(path_arg("Path to normalize")),
            Command::new("join")
                .about("Join paths and normalize the result (drive stripped)")
                .arg(paths_arg("Paths to join, in order")),
            Command::new("resolve")
                .about("Resolve paths into one drive-qualified path")
                .arg(paths_arg("Paths to resolve, in order")),
            Command::new("separate")
                .about("Collapse separator runs into one separator")
                .arg(path_arg("Path to rewrite"))
                .arg(
                    Arg::new("separator")
                        .long("separator")
                        .short('s')
                        .value_name("CHAR")
                        .help("Separator to write"),
                ),
            Command::new("namespaced")
                .about("Resolve a path and print its namespaced form")
                .arg(path_arg("Path to convert")),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(Arg::new("shell").value_name("SHELL").required(true)),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("drivepath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
