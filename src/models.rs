//! Data models for the merger.
//!
//! This module contains the values that flow between the scanner and the
//! aggregator: selected files, the labeled blocks built from them, and the
//! per-run summary.

use std::fmt;
use std::path::PathBuf;

/// A directory entry that passed the selection filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// File name as listed in the directory.
    pub name: String,
    /// Full path used to read the file.
    pub path: PathBuf,
}

/// A source file's content prefixed with its name.
#[derive(Debug, Clone)]
pub struct LabeledBlock<'a> {
    pub name: &'a str,
    pub content: &'a str,
}

impl<'a> LabeledBlock<'a> {
    pub fn new(name: &'a str, content: &'a str) -> Self {
        Self { name, content }
    }
}

impl fmt::Display for LabeledBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "File: {}\n\n{}", self.name, self.content)
    }
}

/// Why a selected file did not make it into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipKind {
    /// The file disappeared between listing and reading.
    MissingSource,
    /// Any other read or append failure.
    Io,
}

/// Outcome of one merge run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Names of files whose blocks were written, in order.
    pub merged: Vec<String>,
    /// Names of files that were skipped, with the reason.
    pub skipped: Vec<(String, SkipKind)>,
}

impl MergeSummary {
    /// Total number of files the run attempted.
    pub fn attempted(&self) -> usize {
        self.merged.len() + self.skipped.len()
    }
}
