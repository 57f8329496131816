//! scan-detailed - per-file inventory reports.
//!
//! Usage:
//!   scan-detailed <DIRECTORY_PATH> <OUTPUT_PATH>
//!
//! Walks the directory tree and writes one CSV row per file with size,
//! hash, MIME type, ownership, timestamps and permissions. Individual
//! file failures are logged and skipped; only an unreadable root or an
//! uncreatable output file fails the run.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Context, Result};

use filecensus_core::{ScanConfig, ScanLog};
use filecensus_extract::MetadataExtractor;
use filecensus_report::{DetailedReport, EventLog};
use filecensus_walk::DirWalker;

#[derive(Parser)]
#[command(
    name = "scan-detailed",
    version,
    about = "Scan a directory and generate a CSV with file details"
)]
struct Cli {
    /// The directory path to scan
    directory_path: PathBuf,

    /// The output CSV file to save the file details
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

/// Run the detailed scan pipeline: walk, extract, stream rows out.
fn run_scan(config: &ScanConfig, output_path: &Path, log: Arc<EventLog>) -> Result<()> {
    log.info(&format!(
        "Starting directory scan for {}",
        config.root.display()
    ));

    let mut report = match DetailedReport::create(output_path) {
        Ok(report) => report,
        Err(err) => {
            log.error(&format!("Error during directory scan: {err}"));
            return Err(err).context("Cannot create output file");
        }
    };

    let walker = DirWalker::new(log.clone());
    let files = match walker.files(config) {
        Ok(files) => files,
        Err(err) => {
            log.error(&format!("Error during directory scan: {err}"));
            return Err(err).context("Cannot read root directory");
        }
    };

    let extractor = MetadataExtractor::new(config.clone());
    let mut total_bytes = 0u64;
    let mut skipped = 0u64;
    for path in files {
        match extractor.extract(&path, log.as_ref()) {
            Ok(record) => {
                total_bytes += record.size_bytes;
                report
                    .write_record(&record)
                    .context("Cannot write report row")?;
                log.info(&format!("Processed file: {}", path.display()));
            }
            Err(err) => {
                skipped += 1;
                log.error(&format!("Error processing file {}: {err}", path.display()));
            }
        }
    }

    let rows = report.finish().context("Cannot flush report")?;
    if skipped > 0 {
        log.info(&format!("Skipped {skipped} file(s); see errors above"));
    }
    log.info(&format!(
        "Inventoried {rows} files totalling {}",
        humansize::format_size(total_bytes, humansize::BINARY)
    ));
    log.info(&format!(
        "CSV file '{}' created successfully with the file information.",
        output_path.display()
    ));

    Ok(())
}
