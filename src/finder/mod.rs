//! Document discovery module
//!
//! Scans the configured search roots for ReleaseLogs.md documents,
//! used by `check --all`.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{ReleaseLogError, Result};

/// File name a release log document is discovered by
pub const LOG_FILE_NAME: &str = "ReleaseLogs.md";

/// Finder for release log documents under the configured roots
pub struct Finder<'a> {
    config: &'a Config,
}

impl<'a> Finder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Find all release log documents under the configured search
    /// roots, in sorted order
    pub fn find(&self) -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();

        for root in &self.config.search_dirs {
            match self.find_in_root(root) {
                Ok(paths) => found.extend(paths),
                Err(e) => {
                    eprintln!("Warning: Skipping search root '{}': {}", root.display(), e);
                }
            }
        }

        found.sort();
        found.dedup();
        Ok(found)
    }

    /// Find release log documents under a single root
    fn find_in_root(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(ReleaseLogError::Document(format!(
                "Search root does not exist: {}",
                root.display()
            )));
        }

        if !root.is_dir() {
            return Err(ReleaseLogError::Document(format!(
                "Search root is not a directory: {}",
                root.display()
            )));
        }

        let mut found = Vec::new();

        for entry in WalkDir::new(root)
            .max_depth(self.config.limits.max_depth)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if path.is_file() && path.file_name().is_some_and(|n| n == LOG_FILE_NAME) {
                found.push(path.to_path_buf());
            }
        }

        Ok(found)
    }
}

/// Hidden files and directories (dot-prefixed) are never scanned
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.') && n != "." && n != "..")
        .unwrap_or(false)
}
