//! Command to split a path into components.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use truecase::path::normalize::normalize_separators;
use truecase::path::tokenize::tokenize;

/// Split a path into its components, one per line.
#[derive(Args)]
pub struct TokenizeCommand {
    /// Path to split (either separator is accepted)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Print the components as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl TokenizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let sep = config.convention();

        let components = tokenize(&normalize_separators(&self.path, sep), sep);

        if self.json {
            let json = serde_json::to_string(&components).map_err(std::io::Error::from)?;
            println!("{json}");
        } else {
            for component in &components {
                println!("{component}");
            }
        }
        Ok(())
    }
}
