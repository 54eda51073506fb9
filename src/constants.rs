//! Application constants for the ZRXP processor
//!
//! This module contains the fixed tokens of the ZRXP exchange format,
//! stream reader defaults, and file discovery helpers used throughout
//! the application.

use std::path::Path;

// =============================================================================
// ZRXP Format Tokens
// =============================================================================

/// First character of every metadata ("basic data information") line
pub const LINE_INDICATOR: char = '#';

/// Separator between keyword-prefixed fields on a metadata line
pub const FIELD_SEPARATOR: &str = "|*|";

// =============================================================================
// Stream Reader Defaults
// =============================================================================

/// Default number of bytes read from the input per chunk
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Default logical line delimiter
///
/// ZRXP files are terminated CRLF; the reader consumes the line feed as
/// delimiter and the grammars strip the carriage return that remains.
pub const DEFAULT_LINE_DELIMITER: &str = "\n";

// =============================================================================
// File Discovery
// =============================================================================

/// File extensions recognized as ZRXP exports (lowercase)
pub const ZRXP_FILE_EXTENSIONS: &[&str] = &["zrx", "zrxp"];

/// Check if a path carries a recognized ZRXP file extension
pub fn is_zrxp_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ZRXP_FILE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zrxp_file_detection() {
        assert!(is_zrxp_file(Path::new("export.zrx")));
        assert!(is_zrxp_file(Path::new("export.zrxp")));
        assert!(is_zrxp_file(Path::new("data/EXPORT.ZRX")));

        assert!(!is_zrxp_file(Path::new("export.csv")));
        assert!(!is_zrxp_file(Path::new("export")));
        assert!(!is_zrxp_file(Path::new(".zrx/export")));
    }
}
