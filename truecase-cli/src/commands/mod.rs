//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Print the true-case form of a path below the base directory
//! - `normalize`: Rewrite alternate separators, optionally adding a trailing one
//! - `join`: Join a child name onto a base path under a capacity
//! - `tokenize`: Split a path into its components
//! - `list`: List the visible entries of a directory
//! - `split`: Print the directory part and file name part of a path
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod join;
pub mod list;
pub mod normalize;
pub mod resolve;
pub mod split;
pub mod tokenize;

pub use completions::CompletionsCommand;
pub use join::JoinCommand;
pub use list::ListCommand;
pub use normalize::NormalizeCommand;
pub use resolve::ResolveCommand;
pub use split::SplitCommand;
pub use tokenize::TokenizeCommand;
