//! Merge workflow: reset the output, select candidates, append one labeled
//! block per readable file, then append the trailer.
//!
//! Per-file failures are reported on the diagnostics writer and skipped.
//! Only reset, directory listing and the trailer write can fail a run.

use crate::config::MergeConfig;
use crate::error::MergeError;
use crate::models::{Candidate, LabeledBlock, MergeSummary};
use crate::scanner::FileScanner;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Merges the selected files of one directory into the output file.
pub struct Aggregator {
    scanner: FileScanner,
    config: MergeConfig,
}

impl Aggregator {
    pub fn new(root: PathBuf, config: MergeConfig) -> Self {
        let scanner = FileScanner::new(root, config.filter.clone());
        Self { scanner, config }
    }

    /// Path of the merged output file.
    pub fn output_path(&self) -> PathBuf {
        self.scanner.root().join(&self.config.output.file)
    }

    /// Run the whole workflow, writing skip diagnostics to `diagnostics`.
    pub fn run<W: Write>(&self, diagnostics: &mut W) -> Result<MergeSummary> {
        self.reset()?;
        let candidates = self.select()?;
        info!("Selected {} files", candidates.len());

        let summary = self.merge_all(&candidates, diagnostics)?;
        self.finalize()?;

        Ok(summary)
    }

    /// Delete the output file left by a previous run.
    pub fn reset(&self) -> Result<()> {
        let path = self.output_path();
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed previous output {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to remove previous output {}", path.display())),
        }
    }

    /// List the files that will be merged, in directory order.
    pub fn select(&self) -> Result<Vec<Candidate>> {
        self.scanner.scan()
    }

    /// Append every candidate, skipping the ones that fail.
    pub fn merge_all<W: Write>(
        &self,
        candidates: &[Candidate],
        diagnostics: &mut W,
    ) -> Result<MergeSummary> {
        let mut summary = MergeSummary::default();

        for candidate in candidates {
            match self.append_file(candidate) {
                Ok(()) => summary.merged.push(candidate.name.clone()),
                Err(e) => {
                    warn!("Skipping {}: {}", e.name(), e);
                    writeln!(diagnostics, "{}", e).context("Failed to write diagnostic")?;
                    summary.skipped.push((e.name().to_string(), e.kind()));
                }
            }
        }

        Ok(summary)
    }

    /// Read one candidate and append its labeled block.
    pub fn append_file(&self, candidate: &Candidate) -> Result<(), MergeError> {
        let content = fs::read_to_string(&candidate.path)
            .map_err(|e| MergeError::from_io(&candidate.name, e))?;

        let block = LabeledBlock::new(&candidate.name, &content);
        append_to(&self.output_path(), &block.to_string())
            .map_err(|e| MergeError::from_io(&candidate.name, e))?;

        debug!("Appended {} ({} bytes)", candidate.name, content.len());
        Ok(())
    }

    /// Append the trailer. Runs even when every file was skipped.
    pub fn finalize(&self) -> Result<()> {
        let path = self.output_path();
        append_to(&path, &self.config.output.trailer)
            .with_context(|| format!("Failed to write trailer to {}", path.display()))
    }
}

/// Open `path` for appending, creating it if needed, and sync the write.
fn append_to(path: &Path, text: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    file.sync_data()
}
