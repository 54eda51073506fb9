//! ZRXP parser for hydrological time-series exchange files
//!
//! This module parses the ZRXP text format used by hydrological data
//! systems: station metadata lines (`#SANR1234|*|SNAMERiver Gauge|*|...`)
//! interleaved with timestamped measurement rows. Contiguous runs of each
//! line kind form blocks, and each metadata block together with the data
//! block that follows it becomes one station record.
//!
//! Format reference: ZRXP 3.0, <https://wiki.bluemodel.org/images/c/cc/ZRXP3.0_EN.pdf>
//!
//! ## Architecture
//!
//! - [`parser`] - Parsing orchestration over the stream reader
//! - [`metadata`] - Metadata-line grammar and keyword matching
//! - [`record_parser`] - Data-row tokenization
//! - [`assembler`] - Block-boundary state machine emitting stations
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zrxp_processor::ZrxpParser;
//!
//! # fn example() -> zrxp_processor::Result<()> {
//! let parser = ZrxpParser::new();
//! let result = parser.parse_file(std::path::Path::new("stations.zrx"))?;
//!
//! println!(
//!     "Parsed {} stations from {} lines",
//!     result.stats.stations_emitted, result.stats.lines_read
//! );
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod metadata;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use assembler::{AssemblerState, BlockAssembler};
pub use parser::{ZrxpParser, read_stations};
pub use stats::{ParseResult, ParseStats};
