//! Command implementations for the ZRXP processor CLI
//!
//! Each command is implemented in its own module; this module dispatches to
//! the appropriate handler based on the parsed arguments.

pub mod inspect;
pub mod scan;
pub mod shared;

// Re-export the main types for easy access
pub use shared::ProcessingStats;

use crate::Result;
use crate::cli::args::Commands;

/// Dispatch a parsed subcommand to its handler
pub fn run(command: Commands) -> Result<ProcessingStats> {
    match command {
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args),
        Commands::Scan(scan_args) => scan::run_scan(scan_args),
    }
}
