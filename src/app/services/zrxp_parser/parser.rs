//! Core ZRXP parser implementation
//!
//! Orchestrates the stream reader, line classification and block assembly
//! in one forward pass, and exposes both a diagnostic `Result` surface and
//! a collapsing convenience entry point.

use std::path::Path;

use tracing::{debug, info, warn};

use super::assembler::BlockAssembler;
use super::metadata::is_metadata_line;
use super::stats::{ParseResult, ParseStats};
use crate::Result;
use crate::app::models::Station;
use crate::app::services::stream_reader::StreamReader;
use crate::config::ParserConfig;

/// Parser for ZRXP station files
#[derive(Debug, Default)]
pub struct ZrxpParser {
    config: ParserConfig,
}

impl ZrxpParser {
    /// Create a parser with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom configuration
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Parse a ZRXP file and return stations with statistics
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        info!("Parsing ZRXP file: {}", path.display());

        let mut reader = StreamReader::open(path, &self.config)?;
        self.parse_stream(&mut reader)
    }

    /// Run one forward pass over an already-open stream
    ///
    /// The reader is left exhausted; callers wanting a second pass can
    /// [`rewind`](StreamReader::rewind) it and parse again.
    pub fn parse_stream(&self, reader: &mut StreamReader) -> Result<ParseResult> {
        let mut assembler = BlockAssembler::new();
        let mut stats = ParseStats::new();
        let mut stations = Vec::new();

        while let Some(line) = reader.next_line() {
            stats.lines_read += 1;
            if is_metadata_line(&line) {
                stats.metadata_lines += 1;
            } else {
                stats.data_lines += 1;
            }

            if let Some(station) = assembler.push(&line)? {
                debug!(
                    "Station block closed: number={:?}, rows={}",
                    station.number(),
                    station.rows().len()
                );
                stations.push(station);
            }
        }

        if let Some(station) = assembler.finish() {
            debug!(
                "Trailing station finalized: number={:?}, rows={}",
                station.number(),
                station.rows().len()
            );
            stations.push(station);
        }

        stats.lines_skipped = reader.skipped_lines();
        stats.stations_emitted = stations.len();

        if stats.lines_skipped > 0 {
            warn!(
                "{} line(s) skipped due to decoding failures",
                stats.lines_skipped
            );
        }
        info!(
            "Parsed {} stations from {} lines ({} metadata, {} data)",
            stats.stations_emitted, stats.lines_read, stats.metadata_lines, stats.data_lines
        );

        Ok(ParseResult { stations, stats })
    }
}

/// Read all stations from a ZRXP file, collapsing every failure to an empty
/// result
///
/// This is the forgiving entry point for callers that only care about data:
/// an unopenable file, a bad delimiter or an I/O failure yields an empty
/// vector rather than an error. Use [`ZrxpParser::parse_file`] to observe
/// the distinct failure kinds.
pub fn read_stations(path: impl AsRef<Path>) -> Vec<Station> {
    match ZrxpParser::new().parse_file(path.as_ref()) {
        Ok(result) => result.stations,
        Err(error) => {
            warn!("Could not produce station data: {}", error);
            Vec::new()
        }
    }
}
