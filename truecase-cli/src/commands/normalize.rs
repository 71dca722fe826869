//! Command to normalize the separators of a path.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use truecase::path::normalize::{ensure_trailing_separator, normalize_separators};

/// Rewrite alternate separators to the primary one.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Also end the path with a separator, if the capacity allows
    #[arg(long)]
    pub trailing: bool,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let sep = config.convention();

        let mut normalized = normalize_separators(&self.path, sep);
        if self.trailing {
            normalized = ensure_trailing_separator(&normalized, config.capacity_or_default(), sep);
        }

        println!("{normalized}");
        Ok(())
    }
}
