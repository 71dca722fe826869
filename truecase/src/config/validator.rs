//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use truecase::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let zero = Config { capacity: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&zero).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the capacity is zero or the base
    /// directory is empty.
    pub fn validate(config: &Config) -> Result<()> {
        if config.capacity == Some(0) {
            return Err(Error::Validation {
                field: "capacity".into(),
                message: "Capacity must be greater than 0".into(),
            });
        }

        if let Some(ref base_dir) = config.base_dir {
            if base_dir.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "base_dir".into(),
                    message: "Base directory cannot be empty".into(),
                });
            }
        }

        Ok(())
    }
}
