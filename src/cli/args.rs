//! Command-line argument definitions for the ZRXP processor
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the ZRXP station file processor
///
/// Parses ZRXP hydrological time-series exchange files into station records
/// and reports on their contents.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "zrxp-processor",
    version,
    about = "Inspect and summarize ZRXP hydrological time-series exchange files",
    long_about = "Parses ZRXP exchange files as written by hydrological data systems: station \
                  metadata lines interleaved with timestamped measurement rows. Reports merged \
                  station metadata, declared column layouts and measurement row counts for \
                  single files or whole directory trees."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the ZRXP processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a single ZRXP file and print its station records
    Inspect(InspectArgs),
    /// Scan a directory tree for ZRXP files and report aggregate statistics
    Scan(ScanArgs),
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Path to the ZRXP file to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of data rows to preview per station
    #[arg(
        short = 'r',
        long = "rows",
        value_name = "N",
        default_value_t = 5,
        help = "Number of data rows to preview per station"
    )]
    pub preview_rows: usize,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl InspectArgs {
    /// Effective log level derived from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

/// Arguments for the scan command
#[derive(Debug, Clone, Parser)]
pub struct ScanArgs {
    /// Directory to scan for ZRXP files (.zrx, .zrxp)
    #[arg(value_name = "DIR")]
    pub input_path: PathBuf,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl ScanArgs {
    /// Effective log level derived from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

fn log_level(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_precedence() {
        assert_eq!(log_level(false, false), "info");
        assert_eq!(log_level(true, false), "debug");
        assert_eq!(log_level(false, true), "warn");
        // Quiet wins over verbose when both are given.
        assert_eq!(log_level(true, true), "warn");
    }

    #[test]
    fn test_inspect_args_parse() {
        let args = Args::parse_from(["zrxp-processor", "inspect", "stations.zrx", "--rows", "10"]);

        match args.command {
            Some(Commands::Inspect(inspect)) => {
                assert_eq!(inspect.file, PathBuf::from("stations.zrx"));
                assert_eq!(inspect.preview_rows, 10);
                assert!(!inspect.verbose);
            }
            other => panic!("expected inspect command, got {:?}", other),
        }
    }

    #[test]
    fn test_scan_args_parse() {
        let args = Args::parse_from(["zrxp-processor", "scan", "/data/exports", "-v"]);

        match args.command {
            Some(Commands::Scan(scan)) => {
                assert_eq!(scan.input_path, PathBuf::from("/data/exports"));
                assert!(scan.verbose);
            }
            other => panic!("expected scan command, got {:?}", other),
        }
    }
}
