//! Test utilities and fixtures for ZRXP parser testing
//!
//! Provides shared fixture builders and temp-file helpers used across the
//! test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod parser_tests;

/// Two-station ZRXP content, CRLF-terminated, with a multi-line metadata
/// block for the second station
pub fn create_test_zrxp() -> Vec<u8> {
    let mut content = Vec::new();

    content.extend_from_slice(
        b"#SANR395201|*|SNAMEUpper Gauge|*|SWATERInn|*|CNAMEDischarge|*|CUNITm3/s\r\n",
    );
    content.extend_from_slice(b"#RINVAL-777|*|LAYOUT(timestamp,value,status)\r\n");
    content.extend_from_slice(b"20240201000000 12.4 200\r\n");
    content.extend_from_slice(b"20240201001500 12.6 200\r\n");
    content.extend_from_slice(b"20240201003000 -777 255\r\n");
    content.extend_from_slice(b"#SANR395202|*|SNAMELower Gauge|*|TZUTC+1\r\n");
    content.extend_from_slice(b"#CUNITcm|*|LAYOUT(timestamp,value)\r\n");
    content.extend_from_slice(b"20240201000000 321\r\n");
    content.extend_from_slice(b"20240201001500 323\r\n");

    content
}

/// Write raw bytes to a temporary file and return its handle
pub fn create_temp_zrxp(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}
