//! scan-summary - aggregate directory reports.
//!
//! Usage:
//!   scan-summary <DIRECTORY_PATH> <OUTPUT_PATH>
//!
//! Walks the directory tree counting files and bytes, then writes a
//! two-column CSV summary. Files whose size cannot be read are logged
//! and excluded from the totals; only an unreadable root or an
//! uncreatable output file fails the run.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Context, Result};

use filecensus_core::{ScanConfig, ScanLog};
use filecensus_extract::Aggregator;
use filecensus_report::{EventLog, SummaryReport};
use filecensus_walk::DirWalker;

#[derive(Parser)]
#[command(
    name = "scan-summary",
    version,
    about = "Scan a directory and generate a summary report in CSV"
)]
struct Cli {
    /// The directory path to scan
    directory_path: PathBuf,

    /// The output CSV file to save the summary report
    output_path: PathBuf,

    /// Descend into symlinked directories
    #[arg(long)]
    follow_symlinks: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let log =
        Arc::new(EventLog::for_report(&cli.output_path).context("Cannot create log file")?);

    let config = ScanConfig::builder()
        .root(cli.directory_path)
        .follow_symlinks(cli.follow_symlinks)
        .build()
        .context("Invalid scan configuration")?;

    run_scan(&config, &cli.output_path, log)
}

/// Run the summary scan pipeline: walk, tally, write one data row.
fn run_scan(config: &ScanConfig, output_path: &Path, log: Arc<EventLog>) -> Result<()> {
    log.info(&format!(
        "Starting directory scan for {}",
        config.root.display()
    ));

    let walker = DirWalker::new(log.clone());
    let files = match walker.files(config) {
        Ok(files) => files,
        Err(err) => {
            log.error(&format!("Error during directory scan: {err}"));
            return Err(err).context("Cannot read root directory");
        }
    };

    let mut aggregator = Aggregator::new();
    for path in files {
        aggregator.record(&path, log.as_ref());
    }
    let skipped = aggregator.skipped_files();
    let summary = aggregator.finish();

    log.info("Directory scan complete. Summary:");
    log.info(&format!("Total Files: {}", summary.total_files));
    log.info(&format!(
        "Total Size (bytes): {} ({})",
        summary.total_bytes,
        humansize::format_size(summary.total_bytes, humansize::BINARY)
    ));
    if skipped > 0 {
        log.info(&format!(
            "{skipped} file(s) could not be sized and were excluded from the totals"
        ));
    }

    if let Err(err) = SummaryReport::write(output_path, &summary) {
        log.error(&format!("Error during directory scan: {err}"));
        return Err(err).context("Cannot create output file");
    }
    log.info(&format!(
        "CSV report '{}' created successfully.",
        output_path.display()
    ));

    Ok(())
}
