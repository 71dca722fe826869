//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use truecase::config::{Config, ConfigMerger};
///
/// let low = Config { capacity: Some(100), ..Default::default() };
/// let high = Config { capacity: Some(200), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.capacity, Some(200));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Every field is overwritten only when the source sets it.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.separator.is_some() {
            target.separator = source.separator;
        }

        if source.capacity.is_some() {
            target.capacity = source.capacity;
        }

        if source.base_dir.is_some() {
            target.base_dir.clone_from(&source.base_dir);
        }
    }
}
