//! Command to list the entries of a directory.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::path::PathBuf;
use truecase::path::entries::list;

/// List the visible entries of a directory in the order the filesystem
/// reports them.
///
/// Directories are printed with a trailing `/`. Entries whose names begin
/// with `.` are not shown, since resolution never matches them.
#[derive(Args)]
pub struct ListCommand {
    /// Directory to list
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,
}

impl ListCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if self.dir.as_os_str().is_empty() {
            return Err(CliError::InvalidArguments(
                "directory must not be empty".to_string(),
            ));
        }

        for entry in list(&self.dir)? {
            let entry = entry?;
            if entry.is_directory() {
                println!("{}/", entry.name());
            } else {
                println!("{}", entry.name());
            }
        }
        Ok(())
    }
}
