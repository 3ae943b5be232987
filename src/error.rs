//! Per-file failure taxonomy.
//!
//! A [`MergeError`] never aborts a run. Its `Display` output is the exact
//! diagnostic line printed for the skipped file.

use crate::models::SkipKind;
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// The selected file could not be found at read time.
    #[error("Error: The source file '{name}' does not exist.")]
    MissingSource { name: String },

    /// Any other failure while reading the file or appending its block.
    #[error("An error occurred: {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
}

impl MergeError {
    /// Classify an I/O error raised while handling `name`.
    pub fn from_io(name: impl Into<String>, source: io::Error) -> Self {
        let name = name.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::MissingSource { name }
        } else {
            Self::Io { name, source }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::MissingSource { name } | Self::Io { name, .. } => name,
        }
    }

    pub fn kind(&self) -> SkipKind {
        match self {
            Self::MissingSource { .. } => SkipKind::MissingSource,
            Self::Io { .. } => SkipKind::Io,
        }
    }
}
