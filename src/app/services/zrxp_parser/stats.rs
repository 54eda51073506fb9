//! Parsing statistics and result structures for ZRXP processing

use serde::{Deserialize, Serialize};

use crate::app::models::Station;

/// Parsing result with stations and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Stations in file order
    pub stations: Vec<Station>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total number of lines read from the stream
    pub lines_read: usize,

    /// Lines classified as metadata
    pub metadata_lines: usize,

    /// Lines classified as data rows
    pub data_lines: usize,

    /// Lines dropped because their bytes did not decode
    pub lines_skipped: usize,

    /// Stations emitted
    pub stations_emitted: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every line of the input made it through decoding
    pub fn is_clean(&self) -> bool {
        self.lines_skipped == 0
    }
}
