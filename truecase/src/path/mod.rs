//! Path handling with case-insensitive resolution.
//!
//! This module provides the path handling for the truecase system: separator
//! normalization, tokenization, directory enumeration, and resolution of a
//! requested path against the on-disk tree regardless of letter case.
//!
//! # Key Concepts
//!
//! ## Separator conventions
//!
//! Every operation takes a [`SeparatorConvention`] explicitly. The convention
//! for the running platform comes from [`SeparatorConvention::platform`].
//!
//! ## Normalization
//!
//! [`normalize::normalize_separators`] rewrites the alternate separator to
//! the primary one. [`normalize::ensure_trailing_separator`] and
//! [`normalize::join_path`] work under a byte capacity: the former leaves its
//! input unchanged when it has no room, the latter truncates.
//!
//! ## Resolution
//!
//! [`CaseInsensitiveResolver`] tokenizes the request, lists one directory per
//! component, and keeps the first entry whose name matches ignoring ASCII
//! case. The result carries the true casing found on disk.
//!
//! # Examples
//!
//! ```
//! use truecase::path::normalize::join_path;
//! use truecase::path::tokenize::tokenize;
//! use truecase::path::SeparatorConvention;
//!
//! let sep = SeparatorConvention::unix();
//! assert_eq!(join_path("maps", "office", 64, sep), "maps/office/");
//! assert_eq!(tokenize("./maps//office", sep), [".", "maps", "office"]);
//! ```
//!
//! ```no_run
//! use truecase::path::CaseInsensitiveResolver;
//! use std::path::Path;
//!
//! let resolver = CaseInsensitiveResolver::new();
//! let resolved = resolver.resolve(Path::new("/robot"), "PARAMS/p3dx.p", 256).unwrap();
//! println!("{resolved}");
//! ```

pub mod entries;
pub mod normalize;
pub mod resolver;
pub mod separator;
pub mod split;
pub mod tokenize;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use entries::{DirectoryEntries, DirectoryEntry, DirectoryEntryProvider, FsEntryProvider};
pub use resolver::{CaseInsensitiveResolver, DEFAULT_CAPACITY};
pub use separator::SeparatorConvention;
pub use types::ResolvedPath;
