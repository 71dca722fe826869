//! Command to join a child name onto a base path.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use truecase::path::normalize::join_path;

/// Join a child name onto a base path.
///
/// The result is normalized, ends with a separator, and is truncated to the
/// configured capacity.
#[derive(Args)]
pub struct JoinCommand {
    /// Base path
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Name to append
    #[arg(value_name = "CHILD")]
    pub child: String,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let joined = join_path(
            &self.base,
            &self.child,
            config.capacity_or_default(),
            config.convention(),
        );

        println!("{joined}");
        Ok(())
    }
}
