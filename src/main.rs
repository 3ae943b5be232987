//! fullscript - merge a directory's scripts into one text file
//!
//! Concatenates the .js and .html files of the current directory into
//! fullscript.txt, each preceded by a `File: <name>` header, and closes the
//! file with a fixed trailer message.
//!
//! Exit codes:
//!   0 - Success (skipped files do not change this)
//!   1 - Runtime error (output could not be reset, directory unreadable, etc.)

mod aggregator;
mod cli;
mod config;
mod error;
mod models;
mod scanner;

use aggregator::Aggregator;
use anyhow::{Context, Result};
use cli::Args;
use config::MergeConfig;
use tracing::{debug, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --print-config early (no logging needed)
    if args.print_config {
        print!("{}", MergeConfig::default().to_toml());
        return;
    }

    if let Err(e) = init_logging(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    debug!("fullscript v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(&args) {
        error!("Merge failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr; stdout carries only the per-file diagnostics.
fn init_logging(args: &Args) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level())
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

/// Merge the current directory, or list its candidates for --dry-run.
fn run(args: &Args) -> Result<()> {
    let root = std::env::current_dir().context("Failed to resolve current directory")?;
    let aggregator = Aggregator::new(root, MergeConfig::default());

    if args.dry_run {
        return handle_dry_run(&aggregator);
    }

    let stdout = std::io::stdout();
    let summary = aggregator.run(&mut stdout.lock())?;

    info!(
        "Merged {} of {} files into {}",
        summary.merged.len(),
        summary.attempted(),
        aggregator.output_path().display()
    );
    Ok(())
}

/// Handle --dry-run: select files, print their names, touch nothing.
fn handle_dry_run(aggregator: &Aggregator) -> Result<()> {
    for candidate in aggregator.select()? {
        println!("{}", candidate.name);
    }
    Ok(())
}
