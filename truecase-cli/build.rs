//! Build script for truecase-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("truecase")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve paths case-insensitively against the on-disk tree")
        .long_about(
            "Command-line tool that finds the true casing of a path by matching each \
             component against the directory it lives in, ignoring ASCII case",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("base-dir")
                .long("base-dir")
                .help("Directory requests are resolved against")
                .value_name("PATH")
                .global(true)
                .env("TRUECASE_BASE_DIR"),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .help("Separator convention for paths")
                .value_parser(["platform", "unix", "windows"])
                .global(true),
        )
        .arg(
            Arg::new("capacity")
                .long("capacity")
                .help("Maximum length of a resolved or joined path, in bytes")
                .value_name("BYTES")
                .global(true),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Print the true-case form of a path below the base directory")
                .long_about("Match each component case-insensitively and print the path as it exists on disk"),
            Command::new("normalize")
                .about("Rewrite alternate separators to the primary one")
                .long_about("Normalize separators, optionally ending the path with one"),
            Command::new("join")
                .about("Join a child name onto a base path")
                .long_about("Join, normalize and terminate a path, truncated to the capacity"),
            Command::new("tokenize")
                .about("Split a path into its components")
                .long_about("Print each non-empty component of a path, or a JSON array"),
            Command::new("list")
                .about("List the visible entries of a directory")
                .long_about("List the entries resolution would consider, marking directories with '/'"),
            Command::new("split")
                .about("Print the directory part and file name part of a path")
                .long_about("Split a path at its last separator"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("truecase.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
