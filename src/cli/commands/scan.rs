//! Directory scanning command
//!
//! Walks a directory tree, discovers ZRXP files by extension, parses each
//! one and reports aggregate statistics.

use std::path::{Path, PathBuf};
use std::time::Instant;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::shared::{ProcessingStats, setup_logging};
use crate::cli::args::ScanArgs;
use crate::constants::is_zrxp_file;
use crate::{Result, ZrxpParser};

/// Run the scan command
pub fn run_scan(args: ScanArgs) -> Result<ProcessingStats> {
    setup_logging(args.get_log_level(), args.quiet)?;

    let start = Instant::now();
    let files = discover_files(&args.input_path)?;

    if files.is_empty() {
        println!("No ZRXP files found under {}", args.input_path.display());
        return Ok(ProcessingStats::default());
    }

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("=>-"),
    );

    let parser = ZrxpParser::new();
    let mut stats = ProcessingStats::default();

    for path in &files {
        progress.set_message(
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );

        if let Ok(metadata) = std::fs::metadata(path) {
            stats.input_bytes += metadata.len();
        }

        match parser.parse_file(path) {
            Ok(result) => {
                stats.files_processed += 1;
                stats.stations_parsed += result.stations.len();
                stats.rows_parsed += result
                    .stations
                    .iter()
                    .map(|station| station.rows().len())
                    .sum::<usize>();
                stats.lines_skipped += result.stats.lines_skipped;
            }
            Err(error) => {
                warn!("Failed to parse {}: {}", path.display(), error);
                stats.errors_encountered += 1;
            }
        }

        progress.inc(1);
    }

    progress.finish_and_clear();
    stats.processing_time = start.elapsed();

    print_summary(&args.input_path, &stats);

    Ok(stats)
}

/// Discover ZRXP files under the given root, sorted for stable output
fn discover_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() && is_zrxp_file(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    debug!("Discovered {} ZRXP files under {}", files.len(), root.display());

    Ok(files)
}

fn print_summary(root: &Path, stats: &ProcessingStats) {
    println!("{}", format!("Scan of {}", root.display()).bold());
    println!(
        "  Files parsed:  {}",
        stats.files_processed.to_string().green()
    );
    println!("  Stations:      {}", stats.stations_parsed);
    println!("  Data rows:     {}", stats.rows_parsed);
    if stats.lines_skipped > 0 {
        println!(
            "  Lines skipped: {}",
            stats.lines_skipped.to_string().yellow()
        );
    }
    if stats.errors_encountered > 0 {
        println!(
            "  Failures:      {}",
            stats.errors_encountered.to_string().red()
        );
    }
    println!(
        "  Input size:    {}",
        ProcessingStats::format_size(stats.input_bytes)
    );
    println!("  Elapsed:       {:.2?}", stats.processing_time);
}
