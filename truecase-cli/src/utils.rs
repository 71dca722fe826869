//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading and resolver setup.

use crate::error::CliError;
use std::env;
use std::path::PathBuf;
use truecase::config::SeparatorStyle;
use truecase::{CaseInsensitiveResolver, Config, ConfigBuilder};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // verbose/quiet are consumed by init_logger before dispatch
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Directory requests are resolved against.
    pub base_dir: Option<PathBuf>,

    /// Separator convention override.
    pub separator: Option<SeparatorStyle>,

    /// Capacity override, in bytes.
    pub capacity: Option<usize>,
}

impl GlobalOptions {
    /// The global options expressed as the highest-precedence config layer.
    fn as_overrides(&self) -> Config {
        Config {
            separator: self.separator,
            capacity: self.capacity,
            base_dir: self.base_dir.clone(),
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    ConfigBuilder::new()
        .with_config(global.as_overrides())
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// The directory to resolve against: the configured one, else the CWD.
pub fn base_directory(config: &Config) -> Result<PathBuf, CliError> {
    match config.base_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => Ok(env::current_dir()?),
    }
}

/// A filesystem resolver using the configured separator convention.
pub fn resolver(config: &Config) -> CaseInsensitiveResolver {
    CaseInsensitiveResolver::new().with_convention(config.convention())
}
