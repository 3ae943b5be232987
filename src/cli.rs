//! Command-line interface argument parsing.
//!
//! The merge itself takes no arguments. The flags here only control
//! logging and let a user inspect what a run would do.

use clap::Parser;

/// fullscript - merge .js and .html files into one text file
///
/// Reads every .js file (except names containing "temp") and every .html
/// file in the current directory and writes them, each headed by its file
/// name, to fullscript.txt.
///
/// Examples:
///   fullscript
///   fullscript --dry-run
///   fullscript --print-config
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// List the files that would be merged without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}
