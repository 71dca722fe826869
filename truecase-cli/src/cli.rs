//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, JoinCommand, ListCommand, NormalizeCommand, ResolveCommand, SplitCommand,
    TokenizeCommand,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use truecase::config::SeparatorStyle;

/// Command-line tool for resolving paths case-insensitively.
#[derive(Parser)]
#[command(name = "truecase")]
#[command(
    version,
    about = "Resolve paths case-insensitively against the on-disk tree",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Directory requests are resolved against
    #[arg(long, value_name = "PATH", global = true, env = "TRUECASE_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Separator convention for paths
    #[arg(long, value_enum, global = true)]
    pub separator: Option<SeparatorArg>,

    /// Maximum length of a resolved or joined path, in bytes
    #[arg(
        long,
        value_name = "BYTES",
        global = true,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub capacity: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

/// Separator conventions selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeparatorArg {
    /// The running platform's convention
    Platform,
    /// `/` primary, `\` alternate
    Unix,
    /// `\` primary, `/` alternate
    Windows,
}

impl From<SeparatorArg> for SeparatorStyle {
    fn from(arg: SeparatorArg) -> Self {
        match arg {
            SeparatorArg::Platform => SeparatorStyle::Platform,
            SeparatorArg::Unix => SeparatorStyle::Unix,
            SeparatorArg::Windows => SeparatorStyle::Windows,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the true-case form of a path below the base directory
    Resolve(ResolveCommand),

    /// Rewrite alternate separators to the primary one
    Normalize(NormalizeCommand),

    /// Join a child name onto a base path
    Join(JoinCommand),

    /// Split a path into its components
    Tokenize(TokenizeCommand),

    /// List the visible entries of a directory
    List(ListCommand),

    /// Print the directory part and file name part of a path
    Split(SplitCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
