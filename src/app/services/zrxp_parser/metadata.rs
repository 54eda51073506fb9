//! Metadata-line grammar and keyword matching
//!
//! A metadata ("basic data information") line starts with the `#` indicator
//! and carries keyword-prefixed fields separated by `|*|`. This module
//! classifies lines, parses one metadata line into a keyword/value record,
//! and merges the records of a multi-line metadata block.

use crate::app::models::{Keyword, MetadataRecord};
use crate::constants::{FIELD_SEPARATOR, LINE_INDICATOR};
use crate::{Error, Result};

/// Check whether a line carries station metadata
pub fn is_metadata_line(line: &str) -> bool {
    line.starts_with(LINE_INDICATOR)
}

/// Parse one metadata line into a keyword/value record
///
/// Strips the leading indicator and the carriage return left over from CRLF
/// input (the stream reader consumes the line feed as delimiter), splits on
/// the field separator, and matches each field against the keyword table.
/// Later duplicates of a keyword within the line overwrite earlier ones.
///
/// Returns an error if the line does not start with the indicator; callers
/// classify with [`is_metadata_line`] first, so this is unreachable in the
/// normal parse path.
pub fn parse_metadata_line(line: &str) -> Result<MetadataRecord> {
    if !is_metadata_line(line) {
        return Err(Error::metadata_format(format!(
            "line does not start with '{LINE_INDICATOR}'"
        )));
    }

    let body = &line[LINE_INDICATOR.len_utf8()..];
    let body = body.strip_suffix('\r').unwrap_or(body);

    let mut record = MetadataRecord::new();
    for field in body.split(FIELD_SEPARATOR) {
        if let Some((keyword, value)) = parse_field(field) {
            record.insert(keyword, value);
        }
    }

    Ok(record)
}

/// Match a raw field against the keyword table and extract its value
///
/// The first keyword in [`Keyword::ALL`] order whose tag prefixes the field
/// wins. Extraction removes every occurrence of the tag text from the field,
/// not only the leading one; a value that embeds the tag literal loses those
/// occurrences too. Fields matching no keyword are dropped.
fn parse_field(field: &str) -> Option<(Keyword, String)> {
    Keyword::ALL
        .iter()
        .find(|keyword| field.starts_with(keyword.tag()))
        .map(|keyword| (*keyword, field.replace(keyword.tag(), "")))
}

/// Merge per-line records into one, later lines overwriting earlier ones
pub fn merge_records(records: Vec<MetadataRecord>) -> MetadataRecord {
    records
        .into_iter()
        .fold(MetadataRecord::new(), |mut merged, record| {
            merged.extend(record);
            merged
        })
}
