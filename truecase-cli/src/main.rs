//! Main entry point for the truecase CLI.
//!
//! This is the command-line interface for case-insensitive path resolution.
//! It provides commands for working with paths:
//! - `resolve`: Print the true-case form of a path
//! - `normalize`, `join`, `tokenize`, `split`: Path string manipulation
//! - `list`: Show the entries a resolution would consider

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

    // Install the stderr backend for library diagnostics
    let _level = truecase::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        base_dir: cli.base_dir,
        separator: cli.separator.map(Into::into),
        capacity: cli.capacity,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Tokenize(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Split(cmd) => cmd.execute(&global),
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
