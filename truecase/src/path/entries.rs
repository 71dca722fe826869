//! Directory enumeration.
//!
//! This module lists the entries of a single directory as a lazy sequence of
//! [`DirectoryEntry`] values. The [`DirectoryEntryProvider`] trait is the seam
//! the resolver enumerates through; [`FsEntryProvider`] is the implementation
//! backed by the operating system.
//!
//! Entries whose name begins with a period are never yielded. This hides
//! `.` and `..` and also every other dot-prefixed (hidden) name.

use std::fs::{self, ReadDir};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// One entry of a directory listing.
///
/// # Examples
///
/// ```
/// use truecase::path::DirectoryEntry;
///
/// let entry = DirectoryEntry::new("Office.MAP", false);
/// assert!(entry.matches("office.map"));
/// assert!(!entry.is_directory());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectoryEntry {
    name: String,
    is_directory: bool,
}

impl DirectoryEntry {
    /// Create an entry from its on-disk name and kind.
    #[must_use]
    pub fn new(name: impl Into<String>, is_directory: bool) -> Self {
        Self {
            name: name.into(),
            is_directory,
        }
    }

    /// The entry's name with its true casing.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the entry is a directory (symlinks are followed).
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    /// Whether `component` names this entry, ignoring ASCII case.
    #[must_use]
    pub fn matches(&self, component: &str) -> bool {
        self.name.eq_ignore_ascii_case(component)
    }

    /// Convert into the entry's name.
    #[must_use]
    pub fn into_name(self) -> String {
        self.name
    }
}

/// Something that can enumerate the entries of a directory.
///
/// Implementations yield entries in whatever order their source reports
/// them and must not yield names beginning with a period. Each call to
/// [`list`](Self::list) starts a fresh enumeration; any handle it holds is
/// released when the returned sequence is dropped.
pub trait DirectoryEntryProvider {
    /// The lazy sequence of entries for one listing.
    type Entries: Iterator<Item = Result<DirectoryEntry>>;

    /// Start enumerating `directory`.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryNotFound` if `directory` does not exist,
    /// `NotADirectory` if it exists but is not a directory, and `Io` for any
    /// other failure to open it.
    fn list(&self, directory: &Path) -> Result<Self::Entries>;
}

/// Lists directories through [`std::fs::read_dir`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FsEntryProvider;

impl DirectoryEntryProvider for FsEntryProvider {
    type Entries = DirectoryEntries;

    fn list(&self, directory: &Path) -> Result<DirectoryEntries> {
        list(directory)
    }
}

/// Start enumerating `directory` on the filesystem.
///
/// # Errors
///
/// Returns `DirectoryNotFound` if `directory` does not exist,
/// `NotADirectory` if it is not a directory, and `Io` otherwise.
///
/// # Examples
///
/// ```no_run
/// use truecase::path::entries::list;
/// use std::path::Path;
///
/// for entry in list(Path::new("/etc")).unwrap() {
///     let entry = entry.unwrap();
///     println!("{}", entry.name());
/// }
/// ```
pub fn list(directory: &Path) -> Result<DirectoryEntries> {
    log::debug!("Listing {}", directory.display());
    let inner = fs::read_dir(directory).map_err(|e| open_error(directory, e))?;
    Ok(DirectoryEntries {
        directory: directory.to_path_buf(),
        inner,
    })
}

fn open_error(directory: &Path, source: std::io::Error) -> Error {
    if source.kind() == ErrorKind::NotFound {
        return Error::DirectoryNotFound {
            path: directory.to_path_buf(),
        };
    }
    // A trailing separator makes stat fail on a file, so check the bare path.
    let bare: PathBuf = directory.components().collect();
    if fs::metadata(bare).is_ok_and(|meta| !meta.is_dir()) {
        return Error::NotADirectory {
            path: directory.to_path_buf(),
        };
    }
    Error::Io {
        path: directory.to_path_buf(),
        source,
    }
}

/// A lazy, single-pass listing of one directory.
///
/// Holds the open directory handle until it is exhausted or dropped.
#[derive(Debug)]
pub struct DirectoryEntries {
    directory: PathBuf,
    inner: ReadDir,
}

impl DirectoryEntries {
    /// The directory being listed.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn io_error(&self, source: std::io::Error) -> Error {
        Error::Io {
            path: self.directory.clone(),
            source,
        }
    }
}

impl Iterator for DirectoryEntries {
    type Item = Result<DirectoryEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(self.io_error(e))),
            };

            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    log::debug!(
                        "Skipping non-UTF-8 entry {raw:?} in {}",
                        self.directory.display()
                    );
                    continue;
                }
            };
            if name.starts_with('.') {
                continue;
            }

            let is_directory = match entry.file_type() {
                Ok(kind) if kind.is_symlink() => entry.path().is_dir(),
                Ok(kind) => kind.is_dir(),
                Err(e) => return Some(Err(self.io_error(e))),
            };

            return Some(Ok(DirectoryEntry::new(name, is_directory)));
        }
    }
}
