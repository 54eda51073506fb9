//! Data-row tokenization
//!
//! Any line that is not a metadata line is a data line carrying one
//! measurement row, typically `20240202090000 5.3 200` per the station's
//! declared layout. Tokens pass through verbatim; no numeric or timestamp
//! parsing happens here.

use crate::app::models::DataRow;

/// Tokenize one data line into its space-separated values
///
/// Strips the carriage return left over from CRLF input, then splits on
/// single spaces, dropping empty tokens. An empty line still yields a row
/// (with no tokens); the grammar never discards a line.
pub fn parse_data_row(line: &str) -> DataRow {
    let line = line.strip_suffix('\r').unwrap_or(line);

    line.split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
