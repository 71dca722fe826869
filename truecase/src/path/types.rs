//! Core types for path resolution.

use std::fmt;
use std::path::{Path, PathBuf};

/// A path whose every component was matched against the on-disk tree.
///
/// The relative path carries the filesystem's true casing and is joined with
/// the primary separator of the convention the resolver used.
///
/// # Examples
///
/// ```
/// use truecase::path::ResolvedPath;
/// use std::path::PathBuf;
///
/// let resolved = ResolvedPath::new(
///     "Maps/Office.map".to_string(),
///     PathBuf::from("/robot"),
///     "maps/office.MAP".to_string(),
/// );
/// assert_eq!(resolved.as_str(), "Maps/Office.map");
/// assert_eq!(resolved.requested(), "maps/office.MAP");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath {
    /// The true-case path, relative to `base`.
    relative: String,
    /// The directory resolution started from.
    base: PathBuf,
    /// The request as it was received.
    requested: String,
}

impl ResolvedPath {
    /// Create a new resolved path.
    #[must_use]
    pub fn new(relative: String, base: PathBuf, requested: String) -> Self {
        Self {
            relative,
            base,
            requested,
        }
    }

    /// The true-case path relative to the base directory.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.relative
    }

    /// The base directory resolution started from.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// The original request, before normalization.
    #[must_use]
    pub fn requested(&self) -> &str {
        &self.requested
    }

    /// The base directory joined with the true-case relative path.
    ///
    /// # Examples
    ///
    /// ```
    /// use truecase::path::ResolvedPath;
    /// use std::path::PathBuf;
    ///
    /// let resolved = ResolvedPath::new(
    ///     "Office.map".to_string(),
    ///     PathBuf::from("maps"),
    ///     "office.map".to_string(),
    /// );
    /// assert_eq!(resolved.full_path(), PathBuf::from("maps").join("Office.map"));
    /// ```
    #[must_use]
    pub fn full_path(&self) -> PathBuf {
        self.base.join(&self.relative)
    }

    /// Convert into the true-case relative path.
    #[must_use]
    pub fn into_string(self) -> String {
        self.relative
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.relative)
    }
}

impl AsRef<str> for ResolvedPath {
    fn as_ref(&self) -> &str {
        &self.relative
    }
}
