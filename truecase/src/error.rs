//! Error types for the truecase library.
//!
//! This module provides the error hierarchy for every path operation in the
//! library, using `thiserror` for ergonomic error handling. Each resolution
//! failure carries a single tagged reason that callers can inspect through
//! [`Error::kind`].

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a truecase error.
///
/// # Examples
///
/// ```
/// use truecase::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("Maps/Office.map".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the truecase library.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument was empty or a capacity was zero.
    #[error("invalid input for '{argument}': {reason}")]
    InvalidInput {
        /// The offending argument.
        argument: String,
        /// Why the argument was rejected.
        reason: String,
    },

    /// The requested path names no component to resolve.
    #[error("no file or directory given in '{requested}'")]
    EmptyPath {
        /// The request as it was received.
        requested: String,
    },

    /// The path given for listing does not exist.
    #[error("no such directory: {}", path.display())]
    DirectoryNotFound {
        /// The directory that could not be found.
        path: PathBuf,
    },

    /// The path exists but is not a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The path that was expected to be a directory.
        path: PathBuf,
    },

    /// No entry in a directory matched a requested component.
    #[error("'{component}' does not exist in {}", directory.display())]
    ComponentNotFound {
        /// The requested component, as it was spelled in the request.
        component: String,
        /// The directory that was searched.
        directory: PathBuf,
    },

    /// The resolved path does not fit the caller-supplied capacity.
    #[error("result needs {required} bytes but capacity is {capacity}")]
    BufferTooSmall {
        /// Length the result would have reached.
        required: usize,
        /// The capacity supplied by the caller.
        capacity: usize,
    },

    /// Enumerating a directory failed for a reason other than absence.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// The directory being enumerated.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

/// The failure tag of an [`Error`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::InvalidInput`].
    InvalidInput,
    /// See [`Error::EmptyPath`].
    EmptyPath,
    /// See [`Error::DirectoryNotFound`].
    DirectoryNotFound,
    /// See [`Error::NotADirectory`].
    NotADirectory,
    /// See [`Error::ComponentNotFound`].
    ComponentNotFound,
    /// See [`Error::BufferTooSmall`].
    BufferTooSmall,
    /// See [`Error::Io`].
    Io,
    /// See [`Error::Configuration`] and [`Error::Validation`].
    Configuration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid input"),
            Self::EmptyPath => write!(f, "empty path"),
            Self::DirectoryNotFound => write!(f, "directory not found"),
            Self::NotADirectory => write!(f, "not a directory"),
            Self::ComponentNotFound => write!(f, "component not found"),
            Self::BufferTooSmall => write!(f, "buffer too small"),
            Self::Io => write!(f, "I/O error"),
            Self::Configuration => write!(f, "configuration error"),
        }
    }
}

impl Error {
    /// Shorthand for building an [`Error::InvalidInput`].
    pub(crate) fn invalid_input(argument: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            argument: argument.to_string(),
            reason: reason.into(),
        }
    }

    /// Return the failure tag of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use truecase::{Error, ErrorKind};
    ///
    /// let err = Error::BufferTooSmall { required: 12, capacity: 8 };
    /// assert_eq!(err.kind(), ErrorKind::BufferTooSmall);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::EmptyPath { .. } => ErrorKind::EmptyPath,
            Self::DirectoryNotFound { .. } => ErrorKind::DirectoryNotFound,
            Self::NotADirectory { .. } => ErrorKind::NotADirectory,
            Self::ComponentNotFound { .. } => ErrorKind::ComponentNotFound,
            Self::BufferTooSmall { .. } => ErrorKind::BufferTooSmall,
            Self::Io { .. } => ErrorKind::Io,
            Self::Configuration(_) | Self::Validation { .. } => ErrorKind::Configuration,
        }
    }

    /// Check if error indicates that something requested does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use truecase::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::DirectoryNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::DirectoryNotFound { .. } | Self::ComponentNotFound { .. }
        )
    }
}
