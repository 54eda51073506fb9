//! Configuration management and validation.
//!
//! Provides the parser configuration shared by the stream reader and the
//! ZRXP parser: chunk size, logical line delimiter, and the character
//! encoding of the input file.

use encoding_rs::{Encoding, WINDOWS_1252};

use crate::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_LINE_DELIMITER};
use crate::{Error, Result};

/// Stream and parser configuration
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Number of bytes read from the input per chunk
    pub chunk_size: usize,

    /// Logical line delimiter, encoded with `encoding` before use
    pub delimiter: String,

    /// Character encoding of the input file
    ///
    /// ZRXP exporters write a legacy single-byte encoding; the WHATWG
    /// `iso-8859-1` label resolves to windows-1252.
    pub encoding: &'static Encoding,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            delimiter: DEFAULT_LINE_DELIMITER.to_string(),
            encoding: WINDOWS_1252,
        }
    }
}

impl ParserConfig {
    /// Validate the configuration before a parse attempt
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::configuration("chunk_size must be greater than zero"));
        }

        if self.delimiter.is_empty() {
            return Err(Error::configuration("delimiter must not be empty"));
        }

        Ok(())
    }
}
