#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # truecase
//!
//! A library for resolving paths case-insensitively against the on-disk tree.
//!
//! Programs that ship data files often refer to them with whatever casing
//! their authors typed. On a case-sensitive filesystem those names only open
//! if the casing matches. This library walks the requested path one
//! component at a time and recovers the casing that actually exists.
//!
//! ## Core Types
//!
//! - [`SeparatorConvention`]: primary and alternate directory separators
//! - [`CaseInsensitiveResolver`] and [`ResolvedPath`]: resolution and its result
//! - [`Error`], [`ErrorKind`] and [`Result`]: error handling types
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use truecase::path::normalize::{ensure_trailing_separator, normalize_separators};
//! use truecase::SeparatorConvention;
//!
//! let sep = SeparatorConvention::unix();
//! assert_eq!(normalize_separators("maps\\office", sep), "maps/office");
//! assert_eq!(ensure_trailing_separator("maps", 16, sep), "maps/");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{CaseInsensitiveResolver, ResolvedPath, SeparatorConvention};
