//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder for on-disk directory trees with
//! mixed-case names.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A directory tree rooted in a temporary directory.
///
/// The tree is removed when the fixture is dropped.
///
/// # Examples
///
/// ```no_run
/// # use common::TreeFixture;
/// let tree = TreeFixture::new()
///     .with_dir("Maps")
///     .with_file("Maps/Office.MAP", "2D-Map");
/// ```
pub struct TreeFixture {
    root: TempDir,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Adds a directory (and its parents), given with `/` separators.
    pub fn with_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.path_of(relative)).unwrap();
        self
    }

    /// Adds a file (and its parent directories), given with `/` separators.
    pub fn with_file(self, relative: &str, contents: &str) -> Self {
        let path = self.path_of(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
        self
    }

    /// The root of the tree.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Absolute path of an entry, given with `/` separators.
    pub fn path_of(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .fold(self.root.path().to_path_buf(), |acc, part| acc.join(part))
    }
}

/// The tree used by most resolution tests.
///
/// ```text
/// Maps/
///   Office.MAP
///   Lab/
///     Floor1.map
/// Params/
///   p3dx.p
/// README
/// .Hidden
/// ```
#[allow(dead_code)]
pub fn robot_tree() -> TreeFixture {
    TreeFixture::new()
        .with_file("Maps/Office.MAP", "2D-Map")
        .with_file("Maps/Lab/Floor1.map", "2D-Map")
        .with_file("Params/p3dx.p", "RobotParams")
        .with_file("README", "readme")
        .with_file(".Hidden", "secret")
}
