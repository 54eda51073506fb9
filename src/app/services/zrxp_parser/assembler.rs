//! Block-boundary state machine emitting station records
//!
//! A ZRXP file interleaves a metadata preamble with its data block per
//! station, and metadata may span several consecutive lines when many keyed
//! fields exceed a practical line length. A station is therefore not
//! constructed until the first data line confirms its metadata block is
//! complete; a trailing metadata-only block is finalized at end of input.

use super::metadata::{is_metadata_line, merge_records, parse_metadata_line};
use super::record_parser::parse_data_row;
use crate::Result;
use crate::app::models::{DataRow, MetadataRecord, Station};

/// Which kind of block the assembler is currently accumulating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblerState {
    /// Accumulating contiguous metadata lines for a not-yet-finalized station
    CollectingMetadata,
    /// Accumulating contiguous data lines for the most recent metadata block
    CollectingData,
}

/// Consumes classified lines and emits finished stations at block boundaries
#[derive(Debug)]
pub struct BlockAssembler {
    state: AssemblerState,
    metadata_blocks: Vec<MetadataRecord>,
    row_buffer: Vec<DataRow>,
    pending: Option<Station>,
}

impl BlockAssembler {
    pub fn new() -> Self {
        Self {
            state: AssemblerState::CollectingMetadata,
            metadata_blocks: Vec::new(),
            row_buffer: Vec::new(),
            pending: None,
        }
    }

    /// Current accumulation state
    pub fn state(&self) -> AssemblerState {
        self.state
    }

    /// Feed one line; returns a finished station when this line closes a block
    pub fn push(&mut self, line: &str) -> Result<Option<Station>> {
        if is_metadata_line(line) {
            // A metadata line after buffered rows closes the previous
            // station. Rows with no station to receive them (data before any
            // metadata) are dropped here.
            let emitted = if self.row_buffer.is_empty() {
                None
            } else {
                let rows = std::mem::take(&mut self.row_buffer);
                self.pending.take().map(|mut station| {
                    station.attach_rows(rows);
                    station
                })
            };

            let record = parse_metadata_line(line)?;
            self.metadata_blocks.push(record);
            self.state = AssemblerState::CollectingMetadata;

            Ok(emitted)
        } else {
            // The first data line completes the metadata block above it.
            if !self.metadata_blocks.is_empty() {
                let merged = merge_records(std::mem::take(&mut self.metadata_blocks));
                self.pending = Some(Station::new(merged));
            }

            self.row_buffer.push(parse_data_row(line));
            self.state = AssemblerState::CollectingData;

            Ok(None)
        }
    }

    /// Finalize at end of input, emitting the trailing station if one exists
    pub fn finish(mut self) -> Option<Station> {
        if !self.metadata_blocks.is_empty() {
            // Input ended inside a metadata block: the station has no data
            // lines, since the block boundary cleared the row buffer.
            let merged = merge_records(std::mem::take(&mut self.metadata_blocks));
            let mut station = Station::new(merged);
            station.attach_rows(std::mem::take(&mut self.row_buffer));
            Some(station)
        } else if !self.row_buffer.is_empty() {
            let rows = std::mem::take(&mut self.row_buffer);
            self.pending.take().map(|mut station| {
                station.attach_rows(rows);
                station
            })
        } else {
            None
        }
    }
}

impl Default for BlockAssembler {
    fn default() -> Self {
        Self::new()
    }
}
