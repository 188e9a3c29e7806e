//! Scratch directory trees for unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A temporary tree of reading folders and `.nibs.toml` files.
pub struct Shelf {
    /// Owns the tree; dropping it removes everything.
    tmp: TempDir,
}

impl Shelf {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            tmp: tempfile::tempdir().unwrap(),
        }
    }

    /// Top of the tree.
    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    /// Creates `rel` and any missing parents. An empty `rel` is the root itself.
    pub fn folder(&self, rel: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes a document file, creating its folder.
    pub fn document(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Writes `.nibs.toml` inside folder `rel` (the root when empty).
    pub fn config(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.folder(rel).join(CONFIG_FILENAME);
        fs::write(&path, contents).unwrap();
        path
    }

    /// Writes a `.nibs.toml` that stops upward discovery.
    pub fn root_config(&self, rel: &str) -> PathBuf {
        self.config(rel, "root = true\n")
    }
}
