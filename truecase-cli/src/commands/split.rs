//! Command to split a path into directory and file name.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use truecase::path::split::{directory_part, file_name_part};

/// Print the directory part, then the file name part, on separate lines.
#[derive(Args)]
pub struct SplitCommand {
    /// Path to split
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl SplitCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let sep = config.convention();

        let directory = directory_part(&self.path, sep)?;
        let file_name = file_name_part(&self.path, sep)?;

        println!("{directory}");
        println!("{file_name}");
        Ok(())
    }
}
