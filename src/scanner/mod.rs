//! File scanner for selecting the files to merge.
//!
//! Only the top level of the root directory is listed. Entries are returned
//! in the order the platform yields them; nothing is sorted.

use crate::config::FilterConfig;
use crate::models::Candidate;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File scanner for discovering merge candidates.
pub struct FileScanner {
    filter: FilterConfig,
    root: PathBuf,
}

impl FileScanner {
    /// Create a new file scanner.
    pub fn new(root: PathBuf, filter: FilterConfig) -> Self {
        Self { filter, root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List the root directory and keep the entries the filter accepts.
    ///
    /// Directories with a matching name are kept too; reading them fails
    /// later and is reported like any other unreadable file.
    pub fn scan(&self) -> Result<Vec<Candidate>> {
        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("Failed to list directory {}", self.root.display()))?;

        let mut candidates = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    debug!("Cannot read directory entry: {}", e);
                    continue;
                }
            };

            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                debug!("Skipping non UTF-8 name: {:?}", entry.file_name());
                continue;
            };

            if !self.filter.accepts(&name) {
                continue;
            }

            debug!("Selected {}", name);
            candidates.push(Candidate {
                path: entry.path(),
                name,
            });
        }

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(candidates: &[Candidate]) -> Vec<String> {
        let mut names: Vec<String> = candidates.iter().map(|c| c.name.clone()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_scan_applies_filter() {
        let dir = TempDir::new().unwrap();
        for name in ["a.js", "b.html", "temp.js", "merge.py", "notes.txt", "attempt.js"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let scanner = FileScanner::new(dir.path().to_path_buf(), FilterConfig::default());
        let found = scanner.scan().unwrap();

        assert_eq!(names(&found), vec!["a.js", "b.html"]);
    }

    #[test]
    fn test_scan_is_not_recursive() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.js"), "x").unwrap();
        fs::write(dir.path().join("top.js"), "x").unwrap();

        let scanner = FileScanner::new(dir.path().to_path_buf(), FilterConfig::default());
        let found = scanner.scan().unwrap();

        assert_eq!(names(&found), vec!["top.js"]);
        assert_eq!(found[0].path, dir.path().join("top.js"));
    }

    #[test]
    fn test_scan_keeps_matching_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("widgets.js")).unwrap();

        let scanner = FileScanner::new(dir.path().to_path_buf(), FilterConfig::default());
        let found = scanner.scan().unwrap();

        assert_eq!(names(&found), vec!["widgets.js"]);
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = TempDir::new().unwrap();
        let scanner = FileScanner::new(dir.path().to_path_buf(), FilterConfig::default());
        assert!(scanner.scan().unwrap().is_empty());
    }

    #[test]
    fn test_scan_missing_root_fails() {
        let dir = TempDir::new().unwrap();
        let scanner = FileScanner::new(dir.path().join("gone"), FilterConfig::default());
        assert!(scanner.scan().is_err());
    }
}
