//! Data models for ZRXP processing
//!
//! This module contains the core data structures for representing ZRXP
//! station metadata and measurement rows: the recognized metadata keyword
//! vocabulary and the station record emitted by the parser.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Metadata Keywords
// =============================================================================

/// Recognized ZRXP metadata keywords
///
/// Each keyword corresponds to a literal tag prefixing a field on a metadata
/// line (`#SANR1234|*|SNAMERiver Gauge|*|...`). Matching is by prefix in the
/// order of [`Keyword::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    /// Station number (`SANR`)
    StationNumber,
    /// Station name (`SNAME`)
    StationName,
    /// Water body the station measures (`SWATER`)
    WaterBody,
    /// Parameter name, e.g. discharge or water level (`CNAME`)
    ParameterName,
    /// Parameter number (`CNR`)
    ParameterNumber,
    /// Measurement unit (`CUNIT`)
    Unit,
    /// Marker value flagging invalid measurements (`RINVAL`)
    InvalidValueMarker,
    /// Time-series path in the source system (`TSPATH`)
    TimeSeriesPath,
    /// Time zone of the timestamps (`TZ`)
    TimeZone,
    /// ZRXP format version (`ZRXPVERSION`)
    FormatVersion,
    /// Software that wrote the file (`ZRXPCREATOR`)
    Creator,
    /// Declared column layout of the data rows (`LAYOUT`)
    Layout,
    /// Source system identifier (`SOURCESYSTEM`)
    SourceSystem,
    /// Source identifier within the source system (`SOURCEID`)
    SourceId,
}

impl Keyword {
    /// Matching priority order for field parsing
    ///
    /// The first keyword in this table whose tag prefixes a field wins, so
    /// the order is part of the parsing contract rather than an accident of
    /// declaration order.
    pub const ALL: [Keyword; 14] = [
        Keyword::StationNumber,
        Keyword::StationName,
        Keyword::WaterBody,
        Keyword::ParameterName,
        Keyword::ParameterNumber,
        Keyword::Unit,
        Keyword::InvalidValueMarker,
        Keyword::TimeSeriesPath,
        Keyword::TimeZone,
        Keyword::FormatVersion,
        Keyword::Creator,
        Keyword::Layout,
        Keyword::SourceSystem,
        Keyword::SourceId,
    ];

    /// Literal tag text as it appears at the start of a metadata field
    pub fn tag(&self) -> &'static str {
        match self {
            Keyword::StationNumber => "SANR",
            Keyword::StationName => "SNAME",
            Keyword::WaterBody => "SWATER",
            Keyword::ParameterName => "CNAME",
            Keyword::ParameterNumber => "CNR",
            Keyword::Unit => "CUNIT",
            Keyword::InvalidValueMarker => "RINVAL",
            Keyword::TimeSeriesPath => "TSPATH",
            Keyword::TimeZone => "TZ",
            Keyword::FormatVersion => "ZRXPVERSION",
            Keyword::Creator => "ZRXPCREATOR",
            Keyword::Layout => "LAYOUT",
            Keyword::SourceSystem => "SOURCESYSTEM",
            Keyword::SourceId => "SOURCEID",
        }
    }
}

/// Metadata for one station, keyed by recognized keyword
///
/// Produced per metadata line and merged across the lines of a block with
/// last-write-wins semantics.
pub type MetadataRecord = HashMap<Keyword, String>;

/// One measurement row: whitespace-separated tokens taken verbatim from a
/// data line (typically timestamp, value and optional status tokens)
pub type DataRow = Vec<String>;

// =============================================================================
// Station Record
// =============================================================================

/// One logical time series: merged metadata plus ordered measurement rows
///
/// A station is constructed exactly once, when the parser detects the end of
/// its block, and is not mutated afterwards. Row order equals the order of
/// appearance in the source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    metadata: MetadataRecord,
    rows: Vec<DataRow>,
}

impl Station {
    /// Create a station from merged metadata, with no rows attached yet
    pub(crate) fn new(metadata: MetadataRecord) -> Self {
        Self {
            metadata,
            rows: Vec::new(),
        }
    }

    /// Attach the buffered data rows of this station's block
    pub(crate) fn attach_rows(&mut self, rows: Vec<DataRow>) {
        self.rows = rows;
    }

    /// Merged metadata of this station
    pub fn metadata(&self) -> &MetadataRecord {
        &self.metadata
    }

    /// Raw value for an arbitrary keyword, if it was present in the file
    pub fn get(&self, keyword: Keyword) -> Option<&str> {
        self.metadata.get(&keyword).map(String::as_str)
    }

    /// Station number (`SANR`)
    pub fn number(&self) -> Option<&str> {
        self.get(Keyword::StationNumber)
    }

    /// Station name (`SNAME`)
    pub fn name(&self) -> Option<&str> {
        self.get(Keyword::StationName)
    }

    /// Water body (`SWATER`)
    pub fn water(&self) -> Option<&str> {
        self.get(Keyword::WaterBody)
    }

    /// Time zone of the timestamps (`TZ`)
    pub fn time_zone(&self) -> Option<&str> {
        self.get(Keyword::TimeZone)
    }

    /// Measurement unit (`CUNIT`)
    pub fn unit(&self) -> Option<&str> {
        self.get(Keyword::Unit)
    }

    /// Marker value flagging invalid measurements (`RINVAL`)
    pub fn invalid_value_marker(&self) -> Option<&str> {
        self.get(Keyword::InvalidValueMarker)
    }

    /// Declared column layout of the data rows
    ///
    /// The raw value looks like `(timestamp,value,status)`; both parenthesis
    /// characters are removed and the remainder split on commas. Returns
    /// `None` when no layout metadata was present.
    pub fn layout(&self) -> Option<Vec<String>> {
        let raw = self.get(Keyword::Layout)?;

        let columns = raw
            .replace('(', "")
            .replace(')', "")
            .split(',')
            .filter(|column| !column.is_empty())
            .map(str::to_owned)
            .collect();

        Some(columns)
    }

    /// Ordered measurement rows of this station
    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station_with(entries: &[(Keyword, &str)]) -> Station {
        let metadata = entries
            .iter()
            .map(|(keyword, value)| (*keyword, value.to_string()))
            .collect();
        Station::new(metadata)
    }

    #[test]
    fn test_keyword_table_order_and_tags() {
        let tags: Vec<&str> = Keyword::ALL.iter().map(Keyword::tag).collect();

        assert_eq!(
            tags,
            vec![
                "SANR",
                "SNAME",
                "SWATER",
                "CNAME",
                "CNR",
                "CUNIT",
                "RINVAL",
                "TSPATH",
                "TZ",
                "ZRXPVERSION",
                "ZRXPCREATOR",
                "LAYOUT",
                "SOURCESYSTEM",
                "SOURCEID",
            ]
        );
    }

    #[test]
    fn test_named_accessors() {
        let station = station_with(&[
            (Keyword::StationNumber, "1234"),
            (Keyword::StationName, "River Gauge"),
            (Keyword::WaterBody, "Danube"),
            (Keyword::TimeZone, "UTC+1"),
            (Keyword::Unit, "m3/s"),
            (Keyword::InvalidValueMarker, "-777"),
        ]);

        assert_eq!(station.number(), Some("1234"));
        assert_eq!(station.name(), Some("River Gauge"));
        assert_eq!(station.water(), Some("Danube"));
        assert_eq!(station.time_zone(), Some("UTC+1"));
        assert_eq!(station.unit(), Some("m3/s"));
        assert_eq!(station.invalid_value_marker(), Some("-777"));
        assert_eq!(station.get(Keyword::Creator), None);
    }

    #[test]
    fn test_absent_keywords_yield_none() {
        let station = station_with(&[]);

        assert_eq!(station.number(), None);
        assert_eq!(station.name(), None);
        assert_eq!(station.layout(), None);
        assert!(station.rows().is_empty());
    }

    #[test]
    fn test_layout_parsing() {
        let station = station_with(&[(Keyword::Layout, "(timestamp,value,status)")]);

        assert_eq!(
            station.layout(),
            Some(vec![
                "timestamp".to_string(),
                "value".to_string(),
                "status".to_string(),
            ])
        );
    }

    #[test]
    fn test_layout_without_columns() {
        let station = station_with(&[(Keyword::Layout, "()")]);

        assert_eq!(station.layout(), Some(Vec::new()));
    }
}
