//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `TRUECASE_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, SeparatorStyle};
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Overrides the separator style.
pub const SEPARATOR_ENV: &str = "TRUECASE_SEPARATOR";
/// Overrides the result capacity.
pub const CAPACITY_ENV: &str = "TRUECASE_CAPACITY";
/// Overrides the base directory.
pub const BASE_DIR_ENV: &str = "TRUECASE_BASE_DIR";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use truecase::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a value cannot be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(style) = Self::var(SEPARATOR_ENV) {
            config.separator =
                Some(SeparatorStyle::parse(&style).map_err(|message| Error::Validation {
                    field: SEPARATOR_ENV.into(),
                    message,
                })?);
        }

        if let Some(capacity) = Self::var(CAPACITY_ENV) {
            config.capacity = Some(capacity.parse().map_err(|_| Error::Validation {
                field: CAPACITY_ENV.into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        if let Some(base_dir) = Self::var(BASE_DIR_ENV) {
            config.base_dir = Some(PathBuf::from(base_dir));
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.is_empty())
    }
}
