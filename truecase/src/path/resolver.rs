//! Case-insensitive path resolution.
//!
//! This module provides the [`CaseInsensitiveResolver`], which maps a
//! requested path of any casing onto the path that actually exists below a
//! base directory, reporting it with the filesystem's true casing.
//!
//! Resolution lists one directory per requested component and matches the
//! component against the listing ignoring ASCII case. When two entries of a
//! directory differ only in case, the first one the listing reports wins.
//! The tree is not locked while it is walked, so a concurrent rename can make
//! an existing path fail to resolve.
//!
//! The separator convention shapes requests and results only. Directories
//! are always listed through native paths built from `base`.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::error::{Error, ErrorKind, Result};
use crate::path::entries::{DirectoryEntry, DirectoryEntryProvider, FsEntryProvider};
use crate::path::normalize::normalize_separators;
use crate::path::separator::SeparatorConvention;
use crate::path::tokenize::{components, CURRENT_DIR};
use crate::path::types::ResolvedPath;

/// Capacity used when the caller has no tighter bound of its own.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Resolves requested paths against a directory tree, ignoring case.
///
/// # Examples
///
/// ```no_run
/// use truecase::path::CaseInsensitiveResolver;
/// use std::path::Path;
///
/// let resolver = CaseInsensitiveResolver::new();
/// let resolved = resolver
///     .resolve(Path::new("/usr/local/Aria"), "maps/office.MAP", 256)
///     .unwrap();
/// println!("{}", resolved.full_path().display());
/// ```
#[derive(Debug, Clone)]
pub struct CaseInsensitiveResolver<P = FsEntryProvider> {
    /// Source of directory listings.
    provider: P,
    /// Separator convention for requests and results.
    convention: SeparatorConvention,
}

impl Default for CaseInsensitiveResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CaseInsensitiveResolver {
    /// Create a resolver over the real filesystem using the platform's
    /// separator convention.
    ///
    /// # Examples
    ///
    /// ```
    /// use truecase::path::{CaseInsensitiveResolver, SeparatorConvention};
    ///
    /// let resolver = CaseInsensitiveResolver::new();
    /// assert_eq!(resolver.convention(), SeparatorConvention::platform());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_provider(FsEntryProvider)
    }
}

impl<P: DirectoryEntryProvider> CaseInsensitiveResolver<P> {
    /// Create a resolver that lists directories through `provider`.
    #[must_use]
    pub fn with_provider(provider: P) -> Self {
        Self {
            provider,
            convention: SeparatorConvention::platform(),
        }
    }

    /// Configure the separator convention.
    ///
    /// # Examples
    ///
    /// ```
    /// use truecase::path::{CaseInsensitiveResolver, SeparatorConvention};
    ///
    /// let resolver = CaseInsensitiveResolver::new()
    ///     .with_convention(SeparatorConvention::windows());
    /// assert_eq!(resolver.convention().primary(), '\\');
    /// ```
    #[must_use]
    pub fn with_convention(mut self, convention: SeparatorConvention) -> Self {
        self.convention = convention;
        self
    }

    /// The separator convention in use.
    #[must_use]
    pub fn convention(&self) -> SeparatorConvention {
        self.convention
    }

    /// Resolve `requested` below `base`, matching each component
    /// case-insensitively.
    ///
    /// `requested` may use either separator and any casing. A leading `"."`
    /// component is dropped. The true-case result may be at most `capacity`
    /// bytes long.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `InvalidInput` if `base` is empty or not UTF-8, or `capacity` is 0
    /// - `EmptyPath` if `requested` names no component
    /// - `DirectoryNotFound` / `NotADirectory` if a directory on the way
    ///   cannot be listed
    /// - `ComponentNotFound` if a component matches no entry
    /// - `BufferTooSmall` if the result would exceed `capacity`
    /// - `Io` if a listing fails for any other reason
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use truecase::path::CaseInsensitiveResolver;
    /// use std::path::Path;
    ///
    /// let resolver = CaseInsensitiveResolver::new();
    /// let resolved = resolver.resolve(Path::new("/base"), "sub/file.txt", 256).unwrap();
    /// assert_eq!(resolved.as_str(), "Sub/File.TXT");
    /// ```
    pub fn resolve(&self, base: &Path, requested: &str, capacity: usize) -> Result<ResolvedPath> {
        log::debug!(
            "Resolving '{requested}' in {} (capacity {capacity})",
            base.display()
        );

        let base_str = base
            .to_str()
            .ok_or_else(|| Error::invalid_input("base directory", "contains invalid UTF-8"))
            .map_err(diagnose)?;
        if base_str.is_empty() {
            return Err(diagnose(Error::invalid_input(
                "base directory",
                "must not be empty",
            )));
        }
        if capacity == 0 {
            return Err(diagnose(Error::invalid_input(
                "capacity",
                "must be greater than 0",
            )));
        }

        let sep = self.convention;
        let normalized = normalize_separators(requested, sep);
        let parts: Vec<&str> = components(&normalized, sep).collect();
        let parts = match parts.split_first() {
            Some((&first, rest)) if first == CURRENT_DIR => rest,
            _ => &parts[..],
        };
        if parts.is_empty() {
            return Err(diagnose(Error::EmptyPath {
                requested: requested.to_string(),
            }));
        }

        let mut current = PathBuf::from(base_str);
        let mut result = String::new();

        for (index, component) in parts.iter().enumerate() {
            let entry = self.find_entry(&current, component)?;
            let name = entry.name();

            let separator_len = if result.is_empty() {
                0
            } else {
                sep.primary().len_utf8()
            };
            let required = result.len() + separator_len + name.len();
            if required > capacity {
                return Err(diagnose(Error::BufferTooSmall { required, capacity }));
            }
            if separator_len > 0 {
                result.push(sep.primary());
            }
            result.push_str(name);

            if index + 1 < parts.len() {
                current.push(name);
            }
        }

        log::debug!("Resolved '{requested}' to '{result}'");
        Ok(ResolvedPath::new(
            result,
            base.to_path_buf(),
            requested.to_string(),
        ))
    }

    /// Check whether `requested` resolves to a file that can be opened for
    /// reading.
    ///
    /// Returns `Ok(false)` when some component does not exist, when the
    /// path resolves to a directory, or when the file cannot be opened.
    ///
    /// # Errors
    ///
    /// Returns any resolution error other than a missing component or
    /// directory.
    pub fn find_file(&self, base: &Path, requested: &str, capacity: usize) -> Result<bool> {
        let resolved = match self.resolve(base, requested, capacity) {
            Ok(resolved) => resolved,
            Err(e) if e.is_not_found() => return Ok(false),
            Err(e) => return Err(e),
        };

        let full = resolved.full_path();
        if full.is_dir() {
            log::debug!("{} is a directory, not a file", full.display());
            return Ok(false);
        }
        match File::open(&full) {
            Ok(_) => Ok(true),
            Err(e) => {
                log::info!("Cannot open {}: {e}", full.display());
                Ok(false)
            }
        }
    }

    /// Size in bytes of the regular file `requested` resolves to.
    ///
    /// Returns `Ok(None)` when some component does not exist, when the path
    /// resolves to something other than a regular file, or when its metadata
    /// cannot be read.
    ///
    /// # Errors
    ///
    /// Returns any resolution error other than a missing component or
    /// directory.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use truecase::path::CaseInsensitiveResolver;
    /// use std::path::Path;
    ///
    /// let resolver = CaseInsensitiveResolver::new();
    /// if let Some(size) = resolver.file_size(Path::new("/base"), "maps/office.map", 256)? {
    ///     println!("{size} bytes");
    /// }
    /// # Ok::<(), truecase::Error>(())
    /// ```
    pub fn file_size(&self, base: &Path, requested: &str, capacity: usize) -> Result<Option<u64>> {
        let resolved = match self.resolve(base, requested, capacity) {
            Ok(resolved) => resolved,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };

        let full = resolved.full_path();
        match fs::metadata(&full) {
            Ok(meta) if meta.is_file() => Ok(Some(meta.len())),
            Ok(_) => {
                log::debug!("{} is not a regular file", full.display());
                Ok(None)
            }
            Err(e) => {
                log::info!("Cannot stat {}: {e}", full.display());
                Ok(None)
            }
        }
    }

    /// Find the first entry of `directory` whose name matches `component`.
    ///
    /// The listing is dropped before returning, on every path.
    fn find_entry(&self, directory: &Path, component: &str) -> Result<DirectoryEntry> {
        let entries = self.provider.list(directory).map_err(diagnose)?;
        for entry in entries {
            let entry = entry.map_err(diagnose)?;
            if entry.matches(component) {
                log::debug!(
                    "Matched '{component}' to '{}' in {}",
                    entry.name(),
                    directory.display()
                );
                return Ok(entry);
            }
        }
        Err(diagnose(Error::ComponentNotFound {
            component: component.to_string(),
            directory: directory.to_path_buf(),
        }))
    }
}

/// Report a resolution failure once, where it was detected.
///
/// Failures go back to the caller, which decides how loudly to report them,
/// so they are logged below the default level.
fn diagnose(err: Error) -> Error {
    match err.kind() {
        ErrorKind::EmptyPath | ErrorKind::ComponentNotFound | ErrorKind::DirectoryNotFound => {
            log::debug!("{err}");
        }
        _ => log::info!("{err}"),
    }
    err
}
