//! Command to resolve a path to its true casing.

use crate::error::CliError;
use crate::utils::{base_directory, load_configuration, resolver, GlobalOptions};
use clap::Args;
use truecase::path::split::strip_quotes;

/// Print the true-case form of a path below the base directory.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path to resolve, in any casing (surrounding double quotes are removed)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Print the base directory joined with the resolved path
    #[arg(long)]
    pub full: bool,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let base = base_directory(&config)?;

        let resolved = resolver(&config).resolve(
            &base,
            strip_quotes(&self.path),
            config.capacity_or_default(),
        )?;

        if self.full {
            println!("{}", resolved.full_path().display());
        } else {
            println!("{resolved}");
        }
        Ok(())
    }
}
