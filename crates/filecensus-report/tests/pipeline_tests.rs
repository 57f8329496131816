//! End-to-end checks over the walk -> extract -> report pipeline.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use filecensus_core::{NullLog, ScanConfig, ScanLog};
use filecensus_extract::{Aggregator, MetadataExtractor};
use filecensus_report::{DETAILED_COLUMNS, DetailedReport, EventLog, SummaryReport};
use filecensus_walk::DirWalker;
use tempfile::TempDir;

fn create_test_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::create_dir(root.join("docs")).unwrap();
    fs::create_dir(root.join("docs/archive")).unwrap();

    fs::write(root.join("readme.txt"), "top level file").unwrap();
    fs::write(root.join("docs/notes.md"), "some notes").unwrap();
    fs::write(root.join("docs/archive/old.tar"), "pretend tarball").unwrap();

    temp
}

fn run_detailed(root: &Path, output: &Path, log: &dyn ScanLog) -> (u64, u64) {
    let config = ScanConfig::new(root);
    let walker = DirWalker::new(Arc::new(NullLog));
    let extractor = MetadataExtractor::new(config.clone());

    let mut report = DetailedReport::create(output).unwrap();
    let mut skipped = 0u64;
    for path in walker.files(&config).unwrap() {
        match extractor.extract(&path, log) {
            Ok(record) => report.write_record(&record).unwrap(),
            Err(err) => {
                skipped += 1;
                log.error(&format!("Error processing file {}: {err}", path.display()));
            }
        }
    }
    (report.finish().unwrap(), skipped)
}

#[test]
fn test_detailed_report_rows_match_files() {
    let temp = create_test_tree();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("report.csv");

    let (rows, skipped) = run_detailed(temp.path(), &output, &NullLog);
    assert_eq!(rows, 3);
    assert_eq!(skipped, 0);

    let contents = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], DETAILED_COLUMNS.join(","));
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().any(|l| l.contains("old.tar") && l.contains(",Yes,")));
}

#[test]
fn test_rescan_of_unchanged_tree_is_idempotent() {
    let temp = create_test_tree();
    let out_dir = TempDir::new().unwrap();
    let first = out_dir.path().join("first.csv");
    let second = out_dir.path().join("second.csv");

    run_detailed(temp.path(), &first, &NullLog);
    run_detailed(temp.path(), &second, &NullLog);

    // Traversal order is not guaranteed, so compare the row sets.
    let mut rows_a: Vec<String> = fs::read_to_string(&first)
        .unwrap()
        .lines()
        .map(String::from)
        .collect();
    let mut rows_b: Vec<String> = fs::read_to_string(&second)
        .unwrap()
        .lines()
        .map(String::from)
        .collect();
    rows_a.sort();
    rows_b.sort();
    assert_eq!(rows_a, rows_b);
}

#[test]
fn test_skipped_file_leaves_no_row_but_an_audit_line() {
    let temp = create_test_tree();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("report.csv");

    let config = ScanConfig::new(temp.path());
    let walker = DirWalker::new(Arc::new(NullLog));
    let paths: Vec<PathBuf> = walker.files(&config).unwrap().collect();

    // One file vanishes between enumeration and extraction.
    fs::remove_file(temp.path().join("docs/notes.md")).unwrap();

    let log = EventLog::for_report(&output).unwrap();
    let extractor = MetadataExtractor::new(config);
    let mut report = DetailedReport::create(&output).unwrap();
    for path in &paths {
        match extractor.extract(path, &log) {
            Ok(record) => {
                report.write_record(&record).unwrap();
            }
            Err(err) => {
                log.error(&format!("Error processing file {}: {err}", path.display()));
            }
        }
    }
    assert_eq!(report.finish().unwrap(), 2);

    let audit = fs::read_to_string(out_dir.path().join("report.csv.log")).unwrap();
    assert!(audit.contains("ERROR"));
    assert!(audit.contains("notes.md"));

    let contents = fs::read_to_string(&output).unwrap();
    assert!(!contents.contains("notes.md"));
    assert!(contents.contains("readme.txt"));
}

#[test]
fn test_summary_pipeline_end_to_end() {
    let temp = create_test_tree();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("summary.csv");

    let config = ScanConfig::new(temp.path());
    let walker = DirWalker::new(Arc::new(NullLog));
    let mut aggregator = Aggregator::new();
    for path in walker.files(&config).unwrap() {
        aggregator.record(&path, &NullLog);
    }
    SummaryReport::write(&output, &aggregator.finish()).unwrap();

    let contents = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Total Files,Total Size (bytes)");
    let total_bytes = (14 + 10 + 15) as u64;
    assert_eq!(lines[1], format!("3,{total_bytes}"));
}
