//! Configuration schema definitions.
//!
//! This module defines the configuration structure for truecase: the
//! separator convention, the default result capacity, and the directory
//! requests are resolved against.

use crate::path::{SeparatorConvention, DEFAULT_CAPACITY};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete configuration structure.
///
/// Every field is optional so that configurations from several sources can
/// be layered on top of each other.
///
/// # Examples
///
/// ```
/// use truecase::config::{Config, SeparatorStyle};
///
/// let config = Config {
///     separator: Some(SeparatorStyle::Windows),
///     capacity: Some(260),
///     ..Default::default()
/// };
/// assert_eq!(config.capacity_or_default(), 260);
/// assert_eq!(config.convention().primary(), '\\');
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Separator convention for requests and results.
    pub separator: Option<SeparatorStyle>,

    /// Maximum length of a resolved path, in bytes.
    pub capacity: Option<usize>,

    /// Directory requests are resolved against.
    pub base_dir: Option<PathBuf>,
}

impl Config {
    /// The separator convention this configuration selects.
    ///
    /// Falls back to the platform convention when no style is set.
    #[must_use]
    pub fn convention(&self) -> SeparatorConvention {
        self.separator.unwrap_or_default().convention()
    }

    /// The configured capacity, or [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn capacity_or_default(&self) -> usize {
        self.capacity.unwrap_or(DEFAULT_CAPACITY)
    }
}

/// Named separator conventions accepted in configuration.
///
/// # Examples
///
/// ```
/// use truecase::config::SeparatorStyle;
///
/// assert_eq!(SeparatorStyle::parse("UNIX").unwrap(), SeparatorStyle::Unix);
/// assert!(SeparatorStyle::parse("mac").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorStyle {
    /// Whatever the running platform uses.
    #[default]
    Platform,
    /// `/` primary, `\` alternate.
    Unix,
    /// `\` primary, `/` alternate.
    Windows,
}

impl SeparatorStyle {
    /// Parses a style name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not one of `platform`, `unix` or
    /// `windows`.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "platform" => Ok(Self::Platform),
            "unix" => Ok(Self::Unix),
            "windows" => Ok(Self::Windows),
            _ => Err(format!("invalid separator style: {s}")),
        }
    }

    /// The convention this style names.
    #[must_use]
    pub const fn convention(self) -> SeparatorConvention {
        match self {
            Self::Platform => SeparatorConvention::platform(),
            Self::Unix => SeparatorConvention::unix(),
            Self::Windows => SeparatorConvention::windows(),
        }
    }
}

impl std::fmt::Display for SeparatorStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Platform => write!(f, "platform"),
            Self::Unix => write!(f, "unix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}
